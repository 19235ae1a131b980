use crate::utils::*;
use sweeper_core as game;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Reveal(game::Coord2),
    Mark(game::Coord2),
    NewGame,
}

fn cell_class(cell: game::CellView, locked: bool) -> String {
    use game::CellView::*;

    let mut class = match cell {
        Hidden => "cell".to_string(),
        Flagged => "cell flag".to_string(),
        Mine => "cell revealed mine".to_string(),
        Revealed(count) => format!("cell revealed count-{}", count),
    };
    if locked {
        class.push_str(" locked");
    }
    class
}

fn cell_text(cell: game::CellView) -> String {
    use game::CellView::*;

    match cell {
        Flagged => "🚩".to_string(),
        Mine => "💣".to_string(),
        Hidden | Revealed(0) => String::new(),
        Revealed(count) => count.to_string(),
    }
}

const fn status_class(status: game::GameStatus) -> &'static str {
    use game::GameStatus::*;
    match status {
        Playing => "playing",
        Won => "won",
        Lost => "lost",
    }
}

const fn status_face(status: game::GameStatus) -> &'static str {
    use game::GameStatus::*;
    match status {
        Playing => "😊",
        Won => "😎",
        Lost => "😵",
    }
}

const fn status_text(status: game::GameStatus) -> &'static str {
    use game::GameStatus::*;
    match status {
        Playing => "Playing",
        Won => "You win!",
        Lost => "Game over",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    pos: game::Coord2,
    cell: game::CellView,
    #[prop_or_default]
    locked: bool,
    callback: Callback<Msg>,
}

#[function_component(CellTile)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        pos,
        cell,
        locked,
        callback,
    } = props.clone();

    let class = cell_class(cell, locked);

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("{:?} primary click", pos);
            callback.emit(Msg::Reveal(pos));
        })
    };

    let oncontextmenu = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        log::trace!("{:?} secondary click", pos);
        callback.emit(Msg::Mark(pos));
    });

    html! {
        <td {class} {onclick} {oncontextmenu}>{cell_text(cell)}</td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub seed: u64,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: game::GameSession,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut session = game::GameSession::new(ctx.props().seed);
        session.reset();
        Self { session }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Reveal(pos) => {
                log::debug!("reveal cell: {:?}", pos);
                self.session.handle_click(pos).has_update()
            }
            Mark(pos) => {
                log::debug!("mark cell: {:?}", pos);
                self.session.toggle_flag(pos).has_update()
            }
            NewGame => {
                self.session.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = self.session.snapshot();
        let (rows, cols) = snapshot.size();
        let status = snapshot.status;
        let is_playable = !status.is_finished();
        let mines_left = format_for_counter(snapshot.mines_left);

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });
        let cb_cell = ctx.link().callback(|msg: Msg| msg);

        html! {
            <div class="minesweeper" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <nav class="game-info">
                    <aside class="mines-left">{mines_left}</aside>
                    <button class={classes!("reset-button", status_class(status))} onclick={cb_new_game}>
                        {status_face(status)}
                    </button>
                    <aside class="game-status">{status_text(status)}</aside>
                </nav>
                <table class={classes!("board", is_playable.then_some("playable"))}>
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..cols).map(|col| {
                                        let pos = (row, col);
                                        let cell = snapshot.cell_at(pos).unwrap_or_default();
                                        let locked = !is_playable;
                                        let callback = cb_cell.clone();
                                        html! {
                                            <CellTile {pos} {cell} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_classes_follow_visible_state() {
        use game::CellView::*;

        assert_eq!(cell_class(Hidden, false), "cell");
        assert_eq!(cell_class(Flagged, false), "cell flag");
        assert_eq!(cell_class(Mine, true), "cell revealed mine locked");
        assert_eq!(cell_class(Revealed(0), false), "cell revealed count-0");
        assert_eq!(cell_class(Revealed(5), false), "cell revealed count-5");
    }

    #[test]
    fn cell_text_hides_zero_counts() {
        use game::CellView::*;

        assert_eq!(cell_text(Hidden), "");
        assert_eq!(cell_text(Revealed(0)), "");
        assert_eq!(cell_text(Revealed(3)), "3");
        assert_eq!(cell_text(Flagged), "🚩");
        assert_eq!(cell_text(Mine), "💣");
    }

    #[test]
    fn status_renders_for_every_state() {
        use game::GameStatus::*;

        assert_eq!(status_class(Playing), "playing");
        assert_eq!(status_face(Won), "😎");
        assert_eq!(status_text(Lost), "Game over");
    }

    #[test]
    fn lost_session_renders_mines_and_locks_the_board() {
        let board = game::Board::from_mine_coords(game::BOARD_SIZE, &[(3, 3)]).unwrap();
        let mut session = game::GameSession::from_board(board, game::RandomMinePlacer::new(0));
        session.handle_click((3, 3));

        let snapshot = session.snapshot();
        let cell = snapshot.cell_at((3, 3)).unwrap();

        assert_eq!(cell_class(cell, snapshot.status.is_finished()), "cell revealed mine locked");
        assert_eq!(status_class(snapshot.status), "lost");
    }
}
