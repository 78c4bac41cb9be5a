//! Kitty keyboard protocol: the flag-stack that negotiates which key
//! events get reported and in what shape, and the `CSI > u` / `CSI < u`
//! / `CSI = u` / `CSI ? u` sequences that manage it.
//!
//! https://sw.kovidgoyal.net/kitty/keyboard-protocol/

use crate::TerminalState;
use std::io::Write;
use termwiz::escape::csi::{Keyboard, KittyKeyboardMode, CSI};

pub use termwiz::escape::csi::KittyKeyboardFlags;

/// Pushing past this depth drops the oldest (bottom-most) entry rather
/// than growing without bound.
const MAX_STACK_DEPTH: usize = 16;

#[derive(Debug, Default)]
pub struct KittyKeyboardState {
    stack: Vec<KittyKeyboardFlags>,
}

impl KittyKeyboardState {
    /// The flags currently in effect; empty if the stack is empty,
    /// meaning legacy (non-Kitty) key encoding is in force.
    pub fn current_flags(&self) -> KittyKeyboardFlags {
        self.stack
            .last()
            .copied()
            .unwrap_or(KittyKeyboardFlags::NONE)
    }

    fn push(&mut self, flags: KittyKeyboardFlags) {
        if self.stack.len() >= MAX_STACK_DEPTH {
            self.stack.remove(0);
        }
        self.stack.push(flags);
    }

    fn pop(&mut self, how_many: u32) {
        let how_many = how_many.max(1) as usize;
        let new_len = self.stack.len().saturating_sub(how_many);
        self.stack.truncate(new_len);
    }

    fn assign(&mut self, flags: KittyKeyboardFlags, mode: KittyKeyboardMode) {
        let updated = match mode {
            KittyKeyboardMode::AssignAll => flags,
            KittyKeyboardMode::SetSpecified => self.current_flags() | flags,
            KittyKeyboardMode::ClearSpecified => self.current_flags() & !flags,
        };
        match self.stack.last_mut() {
            Some(top) => *top = updated,
            None => self.stack.push(updated),
        }
    }
}

impl TerminalState {
    pub(crate) fn perform_kitty_keyboard(&mut self, keyboard: Keyboard) {
        match keyboard {
            Keyboard::PushKittyState { flags, .. } => self.kitty_keyboard.push(flags),
            Keyboard::PopKittyState(how_many) => self.kitty_keyboard.pop(how_many),
            Keyboard::SetKittyState { flags, mode } => self.kitty_keyboard.assign(flags, mode),
            Keyboard::QueryKittySupport => {
                let flags = self.kitty_keyboard.current_flags();
                write!(
                    self.writer,
                    "{}",
                    CSI::Keyboard(Keyboard::ReportKittyState(flags))
                )
                .ok();
                self.writer.flush().ok();
            }
            // This direction only ever flows terminal -> application;
            // if we somehow parse one back from the application side
            // there's nothing sensible to do with it.
            Keyboard::ReportKittyState(_) => {}
        }
    }

    /// The Kitty keyboard flags currently in effect, for encoding key
    /// events destined for the application.
    pub fn kitty_keyboard_flags(&self) -> KittyKeyboardFlags {
        self.kitty_keyboard.current_flags()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn push_pop_restores_previous_flags() {
        let mut k = KittyKeyboardState::default();
        k.push(KittyKeyboardFlags::DISAMBIGUATE_ESCAPE_CODES);
        k.push(KittyKeyboardFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES);
        assert_eq!(
            k.current_flags(),
            KittyKeyboardFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
        );
        k.pop(1);
        assert_eq!(k.current_flags(), KittyKeyboardFlags::DISAMBIGUATE_ESCAPE_CODES);
    }

    #[test]
    fn over_pop_clears_stack() {
        let mut k = KittyKeyboardState::default();
        k.push(KittyKeyboardFlags::DISAMBIGUATE_ESCAPE_CODES);
        k.pop(50);
        assert_eq!(k.current_flags(), KittyKeyboardFlags::NONE);
    }

    #[test]
    fn stack_overflow_drops_oldest() {
        let mut k = KittyKeyboardState::default();
        for i in 0u16..20 {
            k.push(KittyKeyboardFlags::from_bits_truncate((i % 16) + 1));
        }
        assert_eq!(k.stack.len(), MAX_STACK_DEPTH);
    }

    #[test]
    fn union_and_difference_modes() {
        let mut k = KittyKeyboardState::default();
        k.assign(
            KittyKeyboardFlags::DISAMBIGUATE_ESCAPE_CODES,
            KittyKeyboardMode::AssignAll,
        );
        k.assign(
            KittyKeyboardFlags::REPORT_EVENT_TYPES,
            KittyKeyboardMode::SetSpecified,
        );
        assert_eq!(
            k.current_flags(),
            KittyKeyboardFlags::DISAMBIGUATE_ESCAPE_CODES | KittyKeyboardFlags::REPORT_EVENT_TYPES
        );
        k.assign(
            KittyKeyboardFlags::DISAMBIGUATE_ESCAPE_CODES,
            KittyKeyboardMode::ClearSpecified,
        );
        assert_eq!(k.current_flags(), KittyKeyboardFlags::REPORT_EVENT_TYPES);
    }
}
