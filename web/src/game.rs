use std::rc::Rc;

use trivia_core as game;
use yew::prelude::*;

use crate::api::HttpSource;
use crate::utils::*;

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::AdvanceOutcome<'_>, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome| outcome.has_update())
    }
}

pub(crate) enum Msg {
    Restart,
    Loaded(game::Generation, game::Result<game::Board>),
    Activate(game::CellId),
}

fn cell_classes(style: game::CellStyle) -> Classes {
    classes!(style.class(), style.is_locked().then_some("locked"))
}

#[derive(Properties, Clone, PartialEq)]
struct BoardCellProps {
    cell: game::CellView,
    callback: Callback<game::CellId>,
}

#[function_component(BoardCell)]
fn board_cell(props: &BoardCellProps) -> Html {
    let BoardCellProps { cell, callback } = props.clone();
    let id = cell.id;
    let class = cell_classes(cell.style);

    // answered cells are inert
    let onclick = (!cell.style.is_locked()).then(|| {
        Callback::from(move |_: MouseEvent| {
            log::trace!("{} clicked", id);
            callback.emit(id);
        })
    });

    html! {
        <td
            id={id.to_string()}
            data-category={id.category.to_string()}
            data-clue={id.clue.to_string()}
            {class}
            {onclick}
        >
            <span>{cell.text}</span>
        </td>
    }
}

#[derive(Properties, PartialEq)]
struct LoadingProps {
    #[prop_or_default]
    visible: bool,
}

/// Busy indicator shown while a board is being fetched.
#[function_component]
fn LoadingView(props: &LoadingProps) -> Html {
    html! {
        <div class={classes!("spinner", (!props.visible).then_some("hidden"))}>
            <div class="text"><h1>{"Jeopardy Game"}</h1></div>
            <div class="loader"/>
        </div>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
    pub api: AttrValue,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
    source: Rc<HttpSource>,
    config: game::GameConfig,
}

impl GameView {
    fn seed_for(&self, ctx: &Context<Self>, generation: game::Generation) -> u64 {
        match ctx.props().seed {
            // stays reproducible while still giving each restart a new board
            Some(seed) => seed.wrapping_add(generation),
            None => js_random_seed(),
        }
    }

    fn start(&mut self, ctx: &Context<Self>) {
        let generation = self.session.restart();
        let seed = self.seed_for(ctx, generation);
        log::debug!("starting generation {} with seed {}", generation, seed);

        let fetcher = game::BoardFetcher::new(seed, self.config);
        let source = Rc::clone(&self.source);
        ctx.link().send_future(async move {
            let result = fetcher.fetch(source.as_ref()).await;
            Msg::Loaded(generation, result)
        });
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let Some(board) = self.session.view() else {
            return html! {};
        };
        let callback = ctx.link().callback(Msg::Activate);

        html! {
            <table id="jeopardy">
                <thead>
                    <tr>
                        { for board.headers.iter().map(|title| html! { <th>{title.clone()}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for board.cells.rows().into_iter().map(|row| html! {
                            <tr>
                                {
                                    for row.iter().map(|cell| html! {
                                        <BoardCell cell={cell.clone()} callback={callback.clone()}/>
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }

    fn view_error(&self) -> Html {
        match self.session.phase() {
            game::GamePhase::Failed(err) => html! {
                <p class="error">{format!("Could not load the board: {}", err)}</p>
            },
            _ => html! {},
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Restart);
        Self {
            session: game::GameSession::new(),
            source: Rc::new(HttpSource::new(ctx.props().api.to_string())),
            config: game::GameConfig::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Restart => {
                self.start(ctx);
                true
            }
            Loaded(generation, result) => {
                self.session.complete(generation, result) == game::Completion::Applied
            }
            Activate(id) => {
                let outcome = self.session.activate(id);
                log::debug!("activate cell {}: {:?}", id, outcome.as_ref().map(|o| o.text()));
                outcome.has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_restart = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Restart
        });

        html! {
            <>
                <LoadingView visible={self.session.is_loading()}/>
                {self.view_error()}
                {self.view_board(ctx)}
                <button class="play" onclick={cb_restart}>{"Restart"}</button>
            </>
        }
    }
}
