use lights_out_core::{
    Coord, Coord2, PlaySession, RandomBoardGenerator, coord_label, parse_coord_label,
};
use yew::prelude::*;

use crate::settings::{BoardOverrides, Settings, SettingsView};
use crate::utils::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    /// Cell activation, identified by its `"row-col"` label
    Activate(AttrValue),
    NewGame,
    ShowHint,
    ToggleSettings,
    UpdateSettings(Settings),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: Coord,
    col: Coord,
    lit: bool,
    #[prop_or_default]
    hinted: bool,
    callback: Callback<AttrValue>,
}

#[function_component(Cell)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        lit,
        hinted,
        callback,
    } = props.clone();
    let label = AttrValue::from(coord_label((row, col)));
    let class = classes!("cell", lit.then_some("lit"), hinted.then_some("hint"));

    let onclick = {
        let label = label.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("cell {} clicked", label);
            callback.emit(label.clone());
        })
    };

    html! {
        <td {class} data-coord={label} {onclick}/>
    }
}

#[derive(Properties, Clone, Default, PartialEq)]
pub(crate) struct GameViewProps {
    #[prop_or_default]
    pub seed: Option<u64>,
    #[prop_or_default]
    pub overrides: BoardOverrides,
}

pub(crate) struct GameView {
    settings: Settings,
    session: PlaySession,
    seed: u64,
    hint: Option<Coord2>,
    settings_open: bool,
}

impl GameView {
    fn create_session(seed: u64, settings: &Settings) -> PlaySession {
        log::debug!("new game, seed: {}, config: {:?}", seed, settings.board);
        PlaySession::generate(RandomBoardGenerator::new(seed), settings.board)
    }

    fn new_game(&mut self) {
        self.seed = js_random_seed();
        self.session = Self::create_session(self.seed, &self.settings);
        self.hint = None;
    }

    fn activate(&mut self, label: &str) -> bool {
        let coords = match parse_coord_label(label) {
            Ok(coords) => coords,
            Err(err) => {
                log::warn!("bad cell label {:?}: {}", label, err);
                return false;
            }
        };
        match self.session.toggle(coords) {
            Ok(outcome) => {
                log::debug!("toggle {:?}: {:?}", coords, outcome);
                self.hint = None;
                outcome.has_update()
            }
            Err(err) => {
                log::warn!("toggle {:?} ignored: {}", coords, err);
                false
            }
        }
    }

    fn view_won(&self, ctx: &Context<Self>) -> Html {
        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);
        html! {
            <section class="board-won">
                <h1>{"Congratulations!"}</h1>
                <p>{format!("Cleared in {} moves", self.session.moves())}</p>
                <button onclick={cb_new_game}>{"Play Again!"}</button>
            </section>
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let (rows, cols) = self.session.size();
        let callback = ctx.link().callback(Msg::Activate);

        html! {
            <table class="board">
                {
                    for (0..rows).map(|row| html! {
                        <tr>
                            {
                                for (0..cols).map(|col| {
                                    let lit = self.session.is_lit((row, col));
                                    let hinted = self.hint == Some((row, col));
                                    let callback = callback.clone();
                                    html! {
                                        <Cell {row} {col} {lit} {hinted} {callback}/>
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameViewProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameViewProps { seed, overrides } = ctx.props().clone();
        let stored: Settings = LocalOrDefault::local_or_default();
        let settings = Settings {
            board: overrides.apply(stored.board),
        };
        let seed = seed.unwrap_or_else(js_random_seed);
        Self {
            settings,
            session: Self::create_session(seed, &settings),
            seed,
            hint: None,
            settings_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Activate(label) => self.activate(&label),
            NewGame => {
                self.new_game();
                true
            }
            ShowHint => {
                let hint = self.session.hint();
                log::debug!("hint: {:?}", hint);
                let changed = self.hint != hint;
                self.hint = hint;
                changed
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            UpdateSettings(settings) => {
                settings.local_save();
                self.settings = settings;
                self.settings_open = false;
                self.new_game();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let moves = format_for_counter(self.session.moves());
        let cb_new_game = ctx.link().callback(|_: MouseEvent| NewGame);
        let cb_hint = ctx.link().callback(|_: MouseEvent| ShowHint);
        let cb_settings = ctx.link().callback(|_: MouseEvent| ToggleSettings);

        html! {
            <div class="lights-out">
                <header>
                    <h1>{"Lights"}<span>{"Out"}</span></h1>
                    <small onclick={cb_settings}>{"···"}</small>
                </header>
                <nav>
                    <aside title="moves">{moves}</aside>
                    <button onclick={cb_new_game}>{"New game"}</button>
                    <button onclick={cb_hint} disabled={self.session.has_won()}>{"Hint"}</button>
                </nav>
                {
                    if self.session.has_won() {
                        self.view_won(ctx)
                    } else {
                        self.view_board(ctx)
                    }
                }
                <footer><small>{format!("seed {}", self.seed)}</small></footer>
                if self.settings_open {
                    <SettingsView
                        settings={self.settings}
                        on_apply={ctx.link().callback(UpdateSettings)}
                        on_cancel={ctx.link().callback(|_: ()| ToggleSettings)}
                    />
                }
            </div>
        }
    }
}

/// Three digit counter, saturating at 999.
fn format_for_counter(num: u32) -> String {
    match num {
        0..1000 => format!("{:03}", num),
        1000.. => "999".to_string(),
    }
}
