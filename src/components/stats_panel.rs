use crate::util::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub score: u64,
    pub time_ms: u64,
    pub moves: u32,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <dl class="UserStats" style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:10px; font-size:14px; margin:0;">
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"★"}</span>
                <dt style={format!("{} color:#d4af37;", label_style)}>{"Score"}</dt>
                <dd style={format!("{} color:#d4af37; margin:0;", value_style)}>{ props.score }</dd>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"⏱"}</span>
                <dt style={format!("{} color:#58a6ff;", label_style)}>{"Time"}</dt>
                <dd style={format!("{} color:#58a6ff; margin:0;", value_style)}>{ format_time(props.time_ms) }</dd>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#3fb950;", icon_style)}>{"↔"}</span>
                <dt style={format!("{} color:#3fb950;", label_style)}>{"Moves"}</dt>
                <dd style={format!("{} color:#3fb950; margin:0;", value_style)}>{ props.moves }</dd>
            </div>
        </dl>
    }
}
