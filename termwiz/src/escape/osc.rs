use crate::color::SrgbaTuple;
use crate::Result;
pub use crate::hyperlink::Hyperlink;
use crate::{ensure, format_err};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use num_derive::*;
use num_traits::FromPrimitive;
use std::fmt::{Display, Formatter};

#[derive(Debug, thiserror::Error)]
pub enum OscError {
    #[error("invalid OSC: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OperatingSystemCommand {
    SetIconNameAndWindowTitle(String),
    SetWindowTitle(String),
    SetWindowTitleSun(String),
    SetIconName(String),
    SetIconNameSun(String),
    SetHyperlink(Option<Hyperlink>),
    ClearSelection(Selection),
    QuerySelection(Selection),
    SetSelection(Selection, String),

    /// OSC 4: set/query a palette color by index
    ChangeColorNumber(Vec<ChangeColorPair>),
    /// OSC 104: reset palette color(s) to the configured defaults
    ResetColors(Vec<u8>),
    /// OSC 10-19: set/query one of the "dynamic" colors (fg, bg, cursor, ...)
    ChangeDynamicColors(DynamicColorNumber, Vec<ColorOrQuery>),
    /// OSC 110-119: reset one of the dynamic colors to its default
    ResetDynamicColor(DynamicColorNumber),

    /// OSC 7: report the current working directory, as a `file://` URL
    CurrentWorkingDirectory(String),
    /// OSC 9: iTerm2/ConEmu style system notification
    SystemNotification(String),
    /// OSC 9;4: ConEmu-style taskbar progress report
    ConEmuProgress(ProgressState, Option<u8>),
    /// OSC 777: rxvt-unicode extension commands, eg: `notify`
    RxvtExtension(Vec<String>),
    /// OSC 133: shell integration / semantic prompt markup
    FinalTermSemanticPrompt(FinalTermSemanticPrompt),
    /// OSC 1337: iTerm2 proprietary extensions
    ITermProprietary(ITermProprietary),

    GetIconNameAndWindowTitle,

    Unspecified(Vec<Vec<u8>>),
}

/// The state half of a ConEmu/Windows Terminal OSC 9;4 progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressState {
    /// Remove any progress indication
    #[default]
    None,
    /// Normal progress, with a percentage
    Normal,
    /// An error occurred; percentage is the last-known value
    Error,
    /// Progress is happening but the percentage is unknown
    Indeterminate,
    /// Progress is paused/needs attention
    Warning,
}

bitflags::bitflags! {
pub struct Selection :u16{
    const NONE = 0;
    const CLIPBOARD = 1<<1;
    const PRIMARY=1<<2;
    const SELECT=1<<3;
    const CUT0=1<<4;
    const CUT1=1<<5;
    const CUT2=1<<6;
    const CUT3=1<<7;
    const CUT4=1<<8;
    const CUT5=1<<9;
    const CUT6=1<<10;
    const CUT7=1<<11;
    const CUT8=1<<12;
    const CUT9=1<<13;
}
}

impl Selection {
    fn try_parse(buf: &[u8]) -> Result<Selection> {
        if buf == b"" {
            Ok(Selection::SELECT | Selection::CUT0)
        } else {
            let mut s = Selection::NONE;
            for c in buf {
                s |= match c {
                    b'c' => Selection::CLIPBOARD,
                    b'p' => Selection::PRIMARY,
                    b's' => Selection::SELECT,
                    b'0' => Selection::CUT0,
                    b'1' => Selection::CUT1,
                    b'2' => Selection::CUT2,
                    b'3' => Selection::CUT3,
                    b'4' => Selection::CUT4,
                    b'5' => Selection::CUT5,
                    b'6' => Selection::CUT6,
                    b'7' => Selection::CUT7,
                    b'8' => Selection::CUT8,
                    b'9' => Selection::CUT9,
                    _ => return Err(format_err!("invalid selection {:?}", buf)),
                }
            }
            Ok(s)
        }
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        macro_rules! item {
            ($variant:ident, $s:expr) => {
                if (*self & Selection::$variant) != Selection::NONE {
                    write!(f, $s)?;
                }
            };
        }

        item!(CLIPBOARD, "c");
        item!(PRIMARY, "p");
        item!(SELECT, "s");
        item!(CUT0, "0");
        item!(CUT1, "1");
        item!(CUT2, "2");
        item!(CUT3, "3");
        item!(CUT4, "4");
        item!(CUT5, "5");
        item!(CUT6, "6");
        item!(CUT7, "7");
        item!(CUT8, "8");
        item!(CUT9, "9");
        Ok(())
    }
}

/// Either a literal color, or a `?` query for the current value of
/// a dynamic/palette color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorOrQuery {
    Color(SrgbaTuple),
    Query,
}

impl Display for ColorOrQuery {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ColorOrQuery::Query => write!(f, "?"),
            ColorOrQuery::Color(c) => write!(f, "{}", c),
        }
    }
}

impl ColorOrQuery {
    fn parse(s: &[u8]) -> Result<Self> {
        if s == b"?" {
            return Ok(ColorOrQuery::Query);
        }
        let s = std::str::from_utf8(s).map_err(|e| format_err!("{}", e))?;
        SrgbaTuple::parse_x11(s)
            .map(ColorOrQuery::Color)
            .ok_or_else(|| format_err!("invalid color spec {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeColorPair {
    pub palette_index: u8,
    pub color: ColorOrQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
#[repr(u8)]
pub enum DynamicColorNumber {
    TextForegroundColor = 10,
    TextBackgroundColor = 11,
    TextCursorColor = 12,
    MouseForegroundColor = 13,
    MouseBackgroundColor = 14,
    TektronixForegroundColor = 15,
    TektronixBackgroundColor = 16,
    HighlightBackgroundColor = 17,
    TektronixCursorColor = 18,
    HighlightForegroundColor = 19,
}

/// OSC 133 shell-integration markers; see
/// <https://gitlab.freedesktop.org/Per_Bothner/specifications/blob/master/proposals/semantic-prompts.md>
#[derive(Debug, Clone, PartialEq)]
pub enum FinalTermSemanticPrompt {
    FreshLine,
    FreshLineAndStartPrompt {
        aid: Option<String>,
        cl: Option<String>,
    },
    StartPrompt(Option<String>),
    MarkEndOfCommandWithFreshLine {
        aid: Option<String>,
    },
    MarkEndOfPromptAndStartOfInputUntilNextMarker {
        aid: Option<String>,
    },
    MarkEndOfInputAndStartOfOutput {
        aid: Option<String>,
        ret_code: Option<i64>,
    },
    CommandStatus {
        status: Option<i64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ITermDimension {
    Automatic,
    Cells(i64),
    Percent(u8),
}

impl ITermDimension {
    pub fn to_pixels(&self, cell_size: usize, num_cells: usize) -> Option<usize> {
        match self {
            ITermDimension::Automatic => None,
            ITermDimension::Cells(n) => Some((*n).max(0) as usize * cell_size),
            ITermDimension::Percent(p) => {
                Some((num_cells * cell_size * (*p as usize)) / 100)
            }
        }
    }

    fn parse(s: &str) -> Self {
        if s.is_empty() || s == "auto" {
            ITermDimension::Automatic
        } else if let Some(pct) = s.strip_suffix('%') {
            pct.parse::<u8>()
                .map(ITermDimension::Percent)
                .unwrap_or(ITermDimension::Automatic)
        } else {
            s.parse::<i64>()
                .map(ITermDimension::Cells)
                .unwrap_or(ITermDimension::Automatic)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ITermFileData {
    pub name: Option<String>,
    pub size: Option<usize>,
    pub width: ITermDimension,
    pub height: ITermDimension,
    pub preserve_aspect_ratio: bool,
    pub inline: bool,
    pub do_not_move_cursor: bool,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ITermProprietary {
    File(Box<ITermFileData>),
    SetUserVar { name: String, value: String },
    Unspecified(Vec<String>),
}

impl OperatingSystemCommand {
    pub fn parse(osc: &[&[u8]]) -> Self {
        Self::internal_parse(osc).unwrap_or_else(|_| {
            let mut vec = Vec::new();
            for slice in osc {
                vec.push(slice.to_vec());
            }
            OperatingSystemCommand::Unspecified(vec)
        })
    }

    fn parse_selection(osc: &[&[u8]]) -> Result<Self> {
        if osc.len() == 2 {
            Selection::try_parse(osc[1]).map(OperatingSystemCommand::ClearSelection)
        } else if osc.len() == 3 && osc[2] == b"?" {
            Selection::try_parse(osc[1]).map(OperatingSystemCommand::QuerySelection)
        } else if osc.len() == 3 {
            let sel = Selection::try_parse(osc[1])?;
            let bytes = BASE64_STANDARD
                .decode(osc[2])
                .map_err(|e| format_err!("{}", e))?;
            let s = String::from_utf8(bytes)?;
            Ok(OperatingSystemCommand::SetSelection(sel, s))
        } else {
            Err(format_err!("unhandled OSC 52: {:?}", osc))
        }
    }

    fn parse_colors(osc: &[&[u8]]) -> Result<Self> {
        ensure!(osc.len() >= 3 && osc.len() % 2 == 1, "wrong param count");
        let mut pairs = vec![];
        let mut iter = osc[1..].iter();
        while let (Some(idx), Some(color)) = (iter.next(), iter.next()) {
            let idx = std::str::from_utf8(idx)
                .map_err(|e| format_err!("{}", e))?
                .parse::<u8>()
                .map_err(|e| format_err!("{}", e))?;
            pairs.push(ChangeColorPair {
                palette_index: idx,
                color: ColorOrQuery::parse(color)?,
            });
        }
        Ok(OperatingSystemCommand::ChangeColorNumber(pairs))
    }

    fn parse_reset_colors(osc: &[&[u8]]) -> Result<Self> {
        let mut indices = vec![];
        for s in &osc[1..] {
            if s.is_empty() {
                continue;
            }
            let idx = std::str::from_utf8(s)
                .map_err(|e| format_err!("{}", e))?
                .parse::<u8>()
                .map_err(|e| format_err!("{}", e))?;
            indices.push(idx);
        }
        Ok(OperatingSystemCommand::ResetColors(indices))
    }

    fn parse_dynamic_colors(first: DynamicColorNumber, osc: &[&[u8]]) -> Result<Self> {
        let mut colors = vec![];
        let mut idx = first as u8;
        for s in &osc[1..] {
            if DynamicColorNumber::from_u8(idx).is_none() {
                break;
            }
            colors.push(ColorOrQuery::parse(s)?);
            idx += 1;
        }
        ensure!(!colors.is_empty(), "no colors specified");
        Ok(OperatingSystemCommand::ChangeDynamicColors(first, colors))
    }

    fn parse_reset_dynamic_color(which: DynamicColorNumber) -> Result<Self> {
        Ok(OperatingSystemCommand::ResetDynamicColor(which))
    }

    fn parse_rxvt(osc: &[&[u8]]) -> Result<Self> {
        let mut params = vec![];
        for s in &osc[1..] {
            params.push(String::from_utf8(s.to_vec())?);
        }
        Ok(OperatingSystemCommand::RxvtExtension(params))
    }

    fn parse_progress(osc: &[&[u8]]) -> Result<Self> {
        ensure!(osc.len() >= 3, "wrong param count for progress report");
        let state = match osc[2] {
            b"0" => ProgressState::None,
            b"1" => ProgressState::Normal,
            b"2" => ProgressState::Error,
            b"3" => ProgressState::Indeterminate,
            b"4" => ProgressState::Warning,
            _ => return Err(format_err!("invalid progress state {:?}", osc[2])),
        };
        let progress = match osc.get(3) {
            Some(s) => {
                let s = std::str::from_utf8(s)?;
                s.parse::<i64>().ok().map(|v| v.max(0).min(100) as u8)
            }
            None => None,
        };
        Ok(OperatingSystemCommand::ConEmuProgress(state, progress))
    }

    fn parse_semantic_prompt(osc: &[&[u8]]) -> Result<Self> {
        ensure!(osc.len() >= 2, "wrong param count");
        let kind = osc[1];
        fn fields(osc: &[&[u8]]) -> std::collections::HashMap<String, String> {
            let mut map = std::collections::HashMap::new();
            for item in &osc[2..] {
                let s = String::from_utf8_lossy(item);
                if let Some(eq) = s.find('=') {
                    map.insert(s[..eq].to_string(), s[eq + 1..].to_string());
                }
            }
            map
        }
        let prompt = match kind {
            b"A" => {
                let f = fields(osc);
                FinalTermSemanticPrompt::FreshLineAndStartPrompt {
                    aid: f.get("aid").cloned(),
                    cl: f.get("cl").cloned(),
                }
            }
            b"B" => FinalTermSemanticPrompt::StartPrompt(
                fields(osc).get("aid").cloned(),
            ),
            b"C" => {
                let f = fields(osc);
                FinalTermSemanticPrompt::MarkEndOfPromptAndStartOfInputUntilNextMarker {
                    aid: f.get("aid").cloned(),
                }
            }
            b"D" => {
                let f = fields(osc);
                FinalTermSemanticPrompt::MarkEndOfInputAndStartOfOutput {
                    aid: f.get("aid").cloned(),
                    ret_code: f.get("ret_code").and_then(|v| v.parse().ok()),
                }
            }
            b"L" => {
                let f = fields(osc);
                FinalTermSemanticPrompt::MarkEndOfCommandWithFreshLine {
                    aid: f.get("aid").cloned(),
                }
            }
            _ => return Err(format_err!("unhandled OSC 133 subcommand {:?}", kind)),
        };
        Ok(OperatingSystemCommand::FinalTermSemanticPrompt(prompt))
    }

    fn parse_iterm2(osc: &[&[u8]]) -> Result<Self> {
        ensure!(osc.len() >= 2, "wrong param count");
        let body = String::from_utf8_lossy(osc[1]);
        if let Some(rest) = body.strip_prefix("SetUserVar=") {
            let mut parts = rest.splitn(2, '=');
            let name = parts.next().unwrap_or("").to_string();
            let value = parts.next().unwrap_or("");
            let value = BASE64_STANDARD
                .decode(value)
                .ok()
                .and_then(|b| String::from_utf8(b).ok())
                .unwrap_or_default();
            return Ok(OperatingSystemCommand::ITermProprietary(
                ITermProprietary::SetUserVar { name, value },
            ));
        }
        if let Some(rest) = body.strip_prefix("File=") {
            let (params, data) = rest.split_once(':').unwrap_or((rest, ""));
            let mut name = None;
            let mut size = None;
            let mut width = ITermDimension::Automatic;
            let mut height = ITermDimension::Automatic;
            let mut preserve_aspect_ratio = true;
            let mut inline = false;
            let mut do_not_move_cursor = false;
            if !params.is_empty() {
                for kv in params.split(';') {
                    let mut iter = kv.splitn(2, '=');
                    let k = iter.next().unwrap_or("");
                    let v = iter.next().unwrap_or("");
                    match k {
                        "name" => {
                            name = BASE64_STANDARD
                                .decode(v)
                                .ok()
                                .and_then(|b| String::from_utf8(b).ok())
                        }
                        "size" => size = v.parse().ok(),
                        "width" => width = ITermDimension::parse(v),
                        "height" => height = ITermDimension::parse(v),
                        "preserveAspectRatio" => preserve_aspect_ratio = v != "0",
                        "inline" => inline = v == "1",
                        "doNotMoveCursor" => do_not_move_cursor = v == "1",
                        _ => {}
                    }
                }
            }
            let data = BASE64_STANDARD
                .decode(data)
                .map_err(|e| format_err!("{}", e))?;
            return Ok(OperatingSystemCommand::ITermProprietary(
                ITermProprietary::File(Box::new(ITermFileData {
                    name,
                    size,
                    width,
                    height,
                    preserve_aspect_ratio,
                    inline,
                    do_not_move_cursor,
                    data,
                })),
            ));
        }
        Ok(OperatingSystemCommand::ITermProprietary(
            ITermProprietary::Unspecified(vec![body.into_owned()]),
        ))
    }

    fn internal_parse(osc: &[&[u8]]) -> Result<Self> {
        ensure!(!osc.is_empty(), "no params");
        let p1str = String::from_utf8_lossy(osc[0]);
        let code: i64 = p1str.parse().map_err(|e| format_err!("{}", e))?;

        macro_rules! single_string {
            ($variant:ident) => {{
                ensure!(osc.len() == 2, "wrong param count");
                let s = String::from_utf8(osc[1].to_vec())?;
                Ok(OperatingSystemCommand::$variant(s))
            }};
        }

        if let Some(which) = DynamicColorNumber::from_i64(code) {
            return Self::parse_dynamic_colors(which, osc);
        }
        if (110..=119).contains(&code) {
            if let Some(which) = DynamicColorNumber::from_i64(code - 100) {
                return Self::parse_reset_dynamic_color(which);
            }
        }

        match code {
            0 => single_string!(SetIconNameAndWindowTitle),
            1 => single_string!(SetIconName),
            2 => single_string!(SetWindowTitle),
            4 => Self::parse_colors(osc),
            9 if osc.len() >= 2 && osc[1] == b"4" => Self::parse_progress(osc),
            7 => single_string!(CurrentWorkingDirectory),
            8 => Ok(OperatingSystemCommand::SetHyperlink(Hyperlink::parse(
                osc,
            )?)),
            9 => single_string!(SystemNotification),
            104 => Self::parse_reset_colors(osc),
            133 => Self::parse_semantic_prompt(osc),
            777 => Self::parse_rxvt(osc),
            1337 => Self::parse_iterm2(osc),
            21 if osc.len() == 1 => Ok(OperatingSystemCommand::GetIconNameAndWindowTitle),
            52 => Self::parse_selection(osc),
            _ => Err(format_err!("not impl")),
        }
    }
}

impl Display for OperatingSystemCommand {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "\x1b]")?;

        macro_rules! single_string {
            ($code:expr, $s:expr) => {
                write!(f, "{};{}", $code, $s)?
            };
        }

        use self::OperatingSystemCommand::*;
        match self {
            SetIconNameAndWindowTitle(title) => single_string!(0, title),
            SetIconName(title) | SetIconNameSun(title) => single_string!(1, title),
            SetWindowTitle(title) | SetWindowTitleSun(title) => single_string!(2, title),
            SetHyperlink(Some(link)) => link.fmt(f)?,
            SetHyperlink(None) => write!(f, "8;;")?,
            CurrentWorkingDirectory(url) => single_string!(7, url),
            SystemNotification(message) => single_string!(9, message),
            ConEmuProgress(state, progress) => {
                let st = match state {
                    ProgressState::None => 0,
                    ProgressState::Normal => 1,
                    ProgressState::Error => 2,
                    ProgressState::Indeterminate => 3,
                    ProgressState::Warning => 4,
                };
                match progress {
                    Some(p) => write!(f, "9;4;{};{}", st, p)?,
                    None => write!(f, "9;4;{}", st)?,
                }
            }
            GetIconNameAndWindowTitle => write!(f, "21")?,
            ChangeColorNumber(pairs) => {
                write!(f, "4")?;
                for pair in pairs {
                    write!(f, ";{};{}", pair.palette_index, pair.color)?;
                }
            }
            ResetColors(indices) => {
                write!(f, "104")?;
                for idx in indices {
                    write!(f, ";{}", idx)?;
                }
            }
            ChangeDynamicColors(first, colors) => {
                write!(f, "{}", *first as u8)?;
                for c in colors {
                    write!(f, ";{}", c)?;
                }
            }
            ResetDynamicColor(which) => write!(f, "{}", *which as u8 + 100)?,
            RxvtExtension(params) => {
                write!(f, "777")?;
                for p in params {
                    write!(f, ";{}", p)?;
                }
            }
            FinalTermSemanticPrompt(prompt) => {
                write!(f, "133;")?;
                match prompt {
                    FinalTermSemanticPrompt::FreshLine => write!(f, "FreshLine")?,
                    FinalTermSemanticPrompt::FreshLineAndStartPrompt { .. } => write!(f, "A")?,
                    FinalTermSemanticPrompt::StartPrompt(_) => write!(f, "B")?,
                    FinalTermSemanticPrompt::MarkEndOfPromptAndStartOfInputUntilNextMarker {
                        ..
                    } => write!(f, "C")?,
                    FinalTermSemanticPrompt::MarkEndOfInputAndStartOfOutput { .. } => {
                        write!(f, "D")?
                    }
                    FinalTermSemanticPrompt::MarkEndOfCommandWithFreshLine { .. } => {
                        write!(f, "L")?
                    }
                    FinalTermSemanticPrompt::CommandStatus { status } => {
                        write!(f, "D;{}", status.unwrap_or(0))?
                    }
                }
            }
            ITermProprietary(prop) => {
                write!(f, "1337;")?;
                match prop {
                    self::ITermProprietary::SetUserVar { name, value } => write!(
                        f,
                        "SetUserVar={}={}",
                        name,
                        BASE64_STANDARD.encode(value)
                    )?,
                    self::ITermProprietary::File(data) => write!(
                        f,
                        "File=inline={}:{}",
                        if data.inline { 1 } else { 0 },
                        BASE64_STANDARD.encode(&data.data)
                    )?,
                    self::ITermProprietary::Unspecified(v) => {
                        for (idx, item) in v.iter().enumerate() {
                            if idx > 0 {
                                write!(f, ";")?;
                            }
                            write!(f, "{}", item)?;
                        }
                    }
                }
            }
            Unspecified(v) => {
                for (idx, item) in v.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ";")?;
                    }
                    f.write_str(&String::from_utf8_lossy(item))?;
                }
            }
            ClearSelection(s) => write!(f, "52;{}", s)?,
            QuerySelection(s) => write!(f, "52;{};?", s)?,
            SetSelection(s, val) => write!(f, "52;{};{}", s, BASE64_STANDARD.encode(val))?,
        };
        write!(f, "\x07")?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn encode(osc: &OperatingSystemCommand) -> String {
        format!("{}", osc)
    }

    fn parse(osc: &[&str], expected: &str) -> OperatingSystemCommand {
        let mut v = Vec::new();
        for s in osc {
            v.push(s.as_bytes());
        }
        let result = OperatingSystemCommand::parse(&v);

        assert_eq!(encode(&result), expected);

        result
    }

    #[test]
    fn title() {
        assert_eq!(
            parse(&["0", "hello"], "\x1b]0;hello\x07"),
            OperatingSystemCommand::SetIconNameAndWindowTitle("hello".into())
        );

        // Missing title parameter
        assert_eq!(
            parse(&["0"], "\x1b]0\x07"),
            OperatingSystemCommand::Unspecified(vec![b"0".to_vec()])
        );

        // too many params
        assert_eq!(
            parse(&["0", "1", "2"], "\x1b]0;1;2\x07"),
            OperatingSystemCommand::Unspecified(vec![b"0".to_vec(), b"1".to_vec(), b"2".to_vec()])
        );
    }

    #[test]
    fn hyperlink() {
        assert_eq!(
            parse(
                &["8", "id=foo", "http://example.com"],
                "\x1b]8;id=foo;http://example.com\x07"
            ),
            OperatingSystemCommand::SetHyperlink(Some(Hyperlink::new_with_id(
                "http://example.com",
                "foo"
            )))
        );

        assert_eq!(
            parse(&["8", "", ""], "\x1b]8;;\x07"),
            OperatingSystemCommand::SetHyperlink(None)
        );

        // too many params
        assert_eq!(
            parse(&["8", "1", "2"], "\x1b]8;1;2\x07"),
            OperatingSystemCommand::Unspecified(vec![b"8".to_vec(), b"1".to_vec(), b"2".to_vec()])
        );

        assert_eq!(
            Hyperlink::parse(&[b"8", b"", b"x"]).unwrap(),
            Some(Hyperlink::new("x"))
        );
    }

    #[test]
    fn current_working_directory() {
        assert_eq!(
            parse(
                &["7", "file://host/home/user"],
                "\x1b]7;file://host/home/user\x07"
            ),
            OperatingSystemCommand::CurrentWorkingDirectory("file://host/home/user".into())
        );
    }

    #[test]
    fn change_color_number() {
        let result = OperatingSystemCommand::parse(&[b"4", b"0", b"#000000"]);
        match result {
            OperatingSystemCommand::ChangeColorNumber(pairs) => {
                assert_eq!(pairs.len(), 1);
                assert_eq!(pairs[0].palette_index, 0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
