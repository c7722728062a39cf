use crate::app::App;
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::CloseOverlay => app.show_help = false,
        InputAction::MoveLeft => app.move_cursor(false),
        InputAction::MoveRight => app.move_cursor(true),
        InputAction::Pick => app.pick_selected(),
        InputAction::NewGame => app.new_game(),
    }
}
