use crate::records::ScoreRecord;
use crate::util::format_time;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FinishOverlayProps {
    pub show: bool,
    pub final_score: u8,
    pub time_ms: u64,
    pub moves: u32,
    pub records: Vec<ScoreRecord>,
    /// Hides the name form once this game's result is stored.
    pub saved: bool,
    pub on_save: Callback<String>,
}

#[function_component]
pub fn FinishOverlay(props: &FinishOverlayProps) -> Html {
    let input_ref = use_node_ref();
    if !props.show {
        return html! {};
    }
    let onsubmit = {
        let cb = props.on_save.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    html! {
        <div class="FinalScreen FinalScreen--open" style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #3fb950; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
            <h2 style="margin:0 0 12px 0; color:#3fb950;">{"Solved!"}</h2>
            <dl style="margin:0;">
                <dt style="display:inline; opacity:0.8;">{"Score: "}</dt>
                <dd style="display:inline; margin:0;">{ format!("{}/100", props.final_score) }</dd>
                <br />
                <dt style="display:inline; opacity:0.8;">{"Time: "}</dt>
                <dd style="display:inline; margin:0;">{ format_time(props.time_ms) }</dd>
                <br />
                <dt style="display:inline; opacity:0.8;">{"Moves: "}</dt>
                <dd style="display:inline; margin:0;">{ props.moves }</dd>
            </dl>
            if !props.saved {
                <form {onsubmit} style="margin-top:16px; display:flex; gap:8px; justify-content:center;">
                    <input id="user-name" ref={input_ref} type="text" placeholder="Your name" maxlength="32" />
                    <button type="submit">{"Save score"}</button>
                </form>
            }
            <div id="saved-scores" style="margin-top:16px; text-align:left; max-height:180px; overflow-y:auto;">
                <h3 style="margin:0 0 6px 0; font-size:14px; opacity:0.8;">{"Saved scores"}</h3>
                if props.records.is_empty() {
                    <div style="opacity:0.6;">{"No scores yet."}</div>
                }
                { for props.records.iter().map(|record| html! {
                    <div>{ format!("{}: {}", record.name, record.score) }</div>
                }) }
            </div>
        </div>
    }
}
