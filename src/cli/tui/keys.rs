// Key translation - crossterm key events to the bytes a shell expects

use crossterm::event::{KeyCode, KeyModifiers};

/// xterm modifier parameter: 1 + shift(1) + alt(2) + ctrl(4)
fn modifier_param(modifiers: KeyModifiers) -> u8 {
    let mut param = 1;
    if modifiers.contains(KeyModifiers::SHIFT) {
        param += 1;
    }
    if modifiers.contains(KeyModifiers::ALT) {
        param += 2;
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        param += 4;
    }
    param
}

/// Cursor-style keys: ESC [ X, or ESC [ 1 ; m X with modifiers
fn csi_letter(letter: u8, modifiers: KeyModifiers) -> Vec<u8> {
    match modifier_param(modifiers) {
        1 => vec![0x1b, b'[', letter],
        m => format!("\x1b[1;{}{}", m, letter as char).into_bytes(),
    }
}

/// Tilde keys: ESC [ n ~, or ESC [ n ; m ~ with modifiers
fn csi_tilde(number: u8, modifiers: KeyModifiers) -> Vec<u8> {
    match modifier_param(modifiers) {
        1 => format!("\x1b[{}~", number).into_bytes(),
        m => format!("\x1b[{};{}~", number, m).into_bytes(),
    }
}

/// Bytes for a key, or `None` for keys a shell has no encoding for
pub fn key_to_pty_bytes(code: KeyCode, modifiers: KeyModifiers) -> Option<Vec<u8>> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    if ctrl && !alt {
        if let KeyCode::Char(c) = code {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() {
                // Ctrl+A = 0x01 ... Ctrl+Z = 0x1a
                return Some(vec![(c as u8) - b'a' + 1]);
            }
            return match c {
                '[' | '3' => Some(vec![0x1b]),
                '\\' | '4' => Some(vec![0x1c]),
                ']' | '5' => Some(vec![0x1d]),
                '^' | '6' => Some(vec![0x1e]),
                '_' | '7' => Some(vec![0x1f]),
                '@' | '2' | ' ' => Some(vec![0x00]),
                '?' => Some(vec![0x7f]),
                _ => None,
            };
        }
    }

    if alt && !ctrl {
        if let KeyCode::Char(c) = code {
            let mut bytes = vec![0x1b];
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            return Some(bytes);
        }
    }

    let bytes = match code {
        // crossterm already reports the shifted character
        KeyCode::Char(c) => {
            let mut buf = [0u8; 4];
            c.encode_utf8(&mut buf).as_bytes().to_vec()
        }
        KeyCode::Enter => vec![b'\r'],
        KeyCode::Tab => vec![b'\t'],
        KeyCode::BackTab => b"\x1b[Z".to_vec(),
        KeyCode::Backspace if ctrl => vec![0x17],
        KeyCode::Backspace => vec![0x7f],
        KeyCode::Esc => vec![0x1b],
        KeyCode::Up => csi_letter(b'A', modifiers),
        KeyCode::Down => csi_letter(b'B', modifiers),
        KeyCode::Right => csi_letter(b'C', modifiers),
        KeyCode::Left => csi_letter(b'D', modifiers),
        KeyCode::Home => csi_letter(b'H', modifiers),
        KeyCode::End => csi_letter(b'F', modifiers),
        KeyCode::Insert => csi_tilde(2, modifiers),
        KeyCode::Delete => csi_tilde(3, modifiers),
        KeyCode::PageUp => csi_tilde(5, modifiers),
        KeyCode::PageDown => csi_tilde(6, modifiers),
        KeyCode::F(n @ 1..=4) => vec![0x1b, b'O', b'P' + (n - 1)],
        KeyCode::F(n @ 5..=12) => {
            const CODES: [u8; 8] = [15, 17, 18, 19, 20, 21, 23, 24];
            csi_tilde(CODES[usize::from(n - 5)], modifiers)
        }
        _ => return None,
    };
    Some(bytes)
}
