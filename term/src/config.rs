use crate::color::ColorPalette;
use termwiz::cell::UnicodeVersion;
use wezterm_bidi::ParagraphDirectionHint;

/// Whether bidirectional text reordering is applied when rendering a line,
/// and which paragraph direction to assume when no strong directional
/// character is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidiMode {
    pub enabled: bool,
    pub hint: ParagraphDirectionHint,
}

impl BidiMode {
    pub fn enabled(hint: ParagraphDirectionHint) -> Self {
        Self {
            enabled: true,
            hint,
        }
    }
}

impl Default for BidiMode {
    fn default() -> Self {
        Self {
            enabled: false,
            hint: ParagraphDirectionHint::LeftToRight,
        }
    }
}

/// How to rewrite line endings in text that is bracketed-paste'd into
/// the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewlineCanon {
    None,
    LineFeed,
    CarriageReturn,
    CarriageReturnAndLineFeed,
}

impl NewlineCanon {
    pub fn canonicalize(self, text: String) -> String {
        match self {
            NewlineCanon::None => text,
            NewlineCanon::LineFeed => text.replace("\r\n", "\n").replace('\r', "\n"),
            NewlineCanon::CarriageReturn => text.replace("\r\n", "\r").replace('\n', "\r"),
            NewlineCanon::CarriageReturnAndLineFeed => {
                let mut result = String::with_capacity(text.len());
                let mut chars = text.chars().peekable();
                while let Some(c) = chars.next() {
                    match c {
                        '\r' => {
                            if chars.peek() == Some(&'\n') {
                                chars.next();
                            }
                            result.push_str("\r\n");
                        }
                        '\n' => result.push_str("\r\n"),
                        c => result.push(c),
                    }
                }
                result
            }
        }
    }
}

/// Knobs that the embedding application supplies to a `Terminal`.
/// The engine consults this on every escape sequence that has
/// configurable behavior; it never mutates it.
pub trait TerminalConfiguration: std::fmt::Debug + Send + Sync {
    fn scrollback_size(&self) -> usize {
        3500
    }

    // TODO: expose is_double_click_word in config file
    fn is_double_click_word(&self, s: &str) -> bool {
        if s.len() > 1 {
            true
        } else if s.len() == 1 {
            match s.chars().nth(0).unwrap() {
                ' ' | '\t' | '\n' | '{' | '[' | '}' | ']' | '(' | ')' | '"' | '\'' => false,
                _ => true,
            }
        } else {
            false
        }
    }

    // TODO: expose scroll_to_bottom_on_key_input in config file
    fn scroll_to_bottom_on_key_input(&self) -> bool {
        true
    }

    /// Text typed or pasted by the user may have its line endings rewritten
    /// before being placed in the bracketed-paste buffer.
    fn canonicalize_pasted_newlines(&self) -> NewlineCanon {
        NewlineCanon::None
    }

    /// Whether bidirectional reordering is applied by default, and which
    /// paragraph direction is assumed absent a DECSET override.
    fn bidi_mode(&self) -> BidiMode {
        BidiMode::default()
    }

    /// The palette used to resolve named/indexed colors; a DECSET-driven
    /// palette change forks a private copy of this rather than mutating it.
    fn color_palette(&self) -> ColorPalette {
        ColorPalette::default()
    }

    /// Whether `OperatingSystemCommand::GetIconNameAndWindowTitle` and
    /// friends report the real title back to the application.
    fn enable_title_reporting(&self) -> bool {
        false
    }

    /// Whether unrecognized CSI/OSC/DCS sequences are logged at `debug`
    /// level as they're encountered.
    fn log_unknown_escape_sequences(&self) -> bool {
        true
    }

    /// The Unicode version this terminal should measure grapheme widths
    /// against; can be overridden at runtime via DECSET 2027-family modes.
    fn unicode_version(&self) -> UnicodeVersion {
        UnicodeVersion::default()
    }

    /// The string sent in response to ENQ (when no application has
    /// installed its own answerback message).
    fn enq_answerback(&self) -> String {
        "".to_string()
    }

    //    fn hyperlink_rules(&self) -> &Vec<HyperlinkRule>;
}
