use super::{board::PuzzleBoard, finish_overlay::FinishOverlay, stats_panel::StatsPanel};
use crate::config::GameConfig;
use crate::game::{GameAction, GameState};
use crate::model::Coord;
use crate::state::BoardLayout;
use crate::util::clog;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer(|| GameState::browser(GameConfig::from_page()));

    {
        // Authoritative clock: alive only while the session is running, so the
        // effect cleanup is the single cancellation point.
        let dispatcher = game.dispatcher();
        let running = game.clock.is_running();
        let tick_ms = game.clock.tick_ms();
        use_effect_with(running, move |running| {
            let mut active = None;
            if *running {
                if let Some(window) = web_sys::window() {
                    let tick = Closure::wrap(Box::new(move || {
                        dispatcher.dispatch(GameAction::Tick);
                    }) as Box<dyn FnMut()>);
                    match window.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        tick_ms as i32,
                    ) {
                        Ok(id) => active = Some((window, id, tick)),
                        Err(_) => clog("could not start the game clock"),
                    }
                }
            }
            move || {
                if let Some((window, id, tick)) = active {
                    window.clear_interval_with_handle(id);
                    drop(tick);
                }
            }
        });
    }

    let on_move = {
        let dispatcher = game.dispatcher();
        Callback::from(move |at: Coord| dispatcher.dispatch(GameAction::Move(at)))
    };
    let on_save = {
        let dispatcher = game.dispatcher();
        Callback::from(move |name: String| dispatcher.dispatch(GameAction::SaveScore(name)))
    };

    let layout = BoardLayout::new(game.config.board_px, game.grid.length());
    let image_url = AttrValue::from(game.config.image_url.clone());
    let clock = &game.clock;

    html! {
        <div id="root" style="position:relative; min-height:100vh; display:flex; gap:24px; align-items:flex-start; justify-content:center; padding:24px; box-sizing:border-box; background:#0d1117; color:#c9d1d9; font-family:sans-serif;">
            <PuzzleBoard grid={game.grid.clone()} {layout} {image_url} {on_move} />
            <StatsPanel score={clock.display.score} time_ms={clock.display.time_ms} moves={clock.moves} />
            <FinishOverlay
                show={clock.is_finished()}
                final_score={clock.final_score.unwrap_or(0)}
                time_ms={clock.display.time_ms}
                moves={clock.moves}
                records={game.records.clone()}
                saved={game.saved}
                {on_save}
            />
        </div>
    }
}
