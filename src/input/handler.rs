use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::editor::Editor;

pub fn handle_event(editor: &mut Editor, event: Event) {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Release {
            return;
        }
        // Clear any message on keypress
        editor.clear_message();
        handle_key(editor, key);
    }
}

fn handle_key(editor: &mut Editor, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => editor.quit(),
            KeyCode::Char('s') => editor.save(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(c) => editor.insert_char(c),
        KeyCode::Enter => editor.insert_newline(),
        KeyCode::Tab => editor.insert_tab(),
        KeyCode::Backspace => editor.delete_char_backward(),
        KeyCode::Delete => editor.delete_char_forward(),

        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        KeyCode::Home => editor.move_to_line_start(),
        KeyCode::End => editor.move_to_line_end(),

        _ => {}
    }
}
