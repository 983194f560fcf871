use crate::model::{Coord, Grid, Tile};
use crate::state::BoardLayout;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TileViewProps {
    pub tile: Tile,
    pub layout: BoardLayout,
    pub image_url: AttrValue,
    pub on_click: Callback<Coord>,
}

/// One tile. Clicking reports the tile's current cell, nothing else.
#[function_component(TileView)]
pub fn tile_view(props: &TileViewProps) -> Html {
    let onclick = {
        let cb = props.on_click.clone();
        let at = props.tile.current;
        Callback::from(move |_: MouseEvent| cb.emit(at))
    };
    let style = props.layout.tile_style(&props.tile, &props.image_url);
    html! {
        <div class="Tile" {style} {onclick}>
            <span class="Tile-tag" style="position:absolute; top:4px; left:6px; padding:0 5px; border-radius:4px; background:rgba(0,0,0,0.6); font-size:12px; font-weight:600;">
                { props.tile.id }
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PuzzleBoardProps {
    pub grid: Rc<Grid>,
    pub layout: BoardLayout,
    pub image_url: AttrValue,
    pub on_move: Callback<Coord>,
}

#[function_component(PuzzleBoard)]
pub fn puzzle_board(props: &PuzzleBoardProps) -> Html {
    html! {
        <div id="puzzle" style={props.layout.board_style()}>
            { for props.grid.tiles().map(|tile| html! {
                <TileView
                    key={tile.id}
                    tile={*tile}
                    layout={props.layout}
                    image_url={props.image_url.clone()}
                    on_click={props.on_move.clone()}
                />
            }) }
        </div>
    }
}
