use lights_out_core::{BoardConfig, Coord};
use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::StorageKey;

/// Front-end preferences, only applied when a new board is generated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub(crate) board: BoardConfig,
}

impl StorageKey for Settings {
    const KEY: &'static str = "lights-out:settings";
}

/// One-off overrides given through the location hash.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct BoardOverrides {
    pub(crate) rows: Option<Coord>,
    pub(crate) cols: Option<Coord>,
    pub(crate) chance: Option<f64>,
}

impl BoardOverrides {
    pub(crate) fn apply(self, config: BoardConfig) -> BoardConfig {
        BoardConfig::new(
            (
                self.rows.unwrap_or(config.rows()),
                self.cols.unwrap_or(config.cols()),
            ),
            self.chance.unwrap_or(config.chance_lit),
        )
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    pub settings: Settings,
    pub on_apply: Callback<Settings>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let draft = use_state(|| props.settings);

    let update = |edit: fn(BoardConfig, &str) -> Option<BoardConfig>| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match edit(draft.board, &input.value()) {
                Some(board) => draft.set(Settings { board }),
                None => log::debug!("ignoring setting value {:?}", input.value()),
            }
        })
    };
    let on_rows = update(|config, value| {
        let rows = value.parse().ok()?;
        Some(BoardConfig::new((rows, config.cols()), config.chance_lit))
    });
    let on_cols = update(|config, value| {
        let cols = value.parse().ok()?;
        Some(BoardConfig::new((config.rows(), cols), config.chance_lit))
    });
    let on_chance = update(|config, value| {
        let chance = value.parse().ok()?;
        Some(BoardConfig::new(config.size, chance))
    });

    let on_apply = {
        let draft = draft.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit(*draft))
    };
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    let board = draft.board;
    html! {
        <dialog id="settings" open={true}>
            <article>
                <h2>{"Settings"}</h2>
                <label>
                    {"Rows"}
                    <input type="number" min="1" max="255" value={board.rows().to_string()} onchange={on_rows}/>
                </label>
                <label>
                    {"Columns"}
                    <input type="number" min="1" max="255" value={board.cols().to_string()} onchange={on_cols}/>
                </label>
                <label>
                    {"Chance a light starts on"}
                    <input type="number" min="0" max="1" step="0.05" value={board.chance_lit.to_string()} onchange={on_chance}/>
                </label>
                <footer>
                    <button type="reset" onclick={on_cancel}>{"Cancel"}</button>
                    <button onclick={on_apply}>{"New game"}</button>
                </footer>
            </article>
        </dialog>
    }
}
