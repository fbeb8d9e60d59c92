use std::fmt;
use std::io::Write;
use std::str::FromStr;

use thiserror::Error;

use crate::params::{Param, PlatformParams};

/// Naming convention used when rendering declarations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Plain names, consumed by the hardware description build.
    Hardware,
    /// Names prefixed with [`SOFTWARE_PREFIX`] so they can be compiled
    /// alongside the hardware declarations.
    Software,
}

pub const SOFTWARE_PREFIX: &str = "Act";

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Hardware, Mode::Software];

    pub fn token(&self) -> &'static str {
        match self {
            Mode::Hardware => "hw-cpp",
            Mode::Software => "cpp",
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Mode::Hardware => "",
            Mode::Software => SOFTWARE_PREFIX,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized mode `{0}`")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.token() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// One `#define` line.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Declaration {
    mode: Mode,
    param: Param,
}

impl Declaration {
    pub fn new(mode: Mode, param: Param) -> Self {
        Self { mode, param }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#define {}{} {}",
            self.mode.prefix(),
            self.param.name,
            self.param.value
        )
    }
}

pub fn declarations(params: &PlatformParams, mode: Mode) -> Vec<Declaration> {
    params
        .entries()
        .into_iter()
        .map(|param| Declaration::new(mode, param))
        .collect()
}

/// Renders every declaration, one per line, each newline terminated.
pub fn render(params: &PlatformParams, mode: Mode) -> String {
    let mut out = String::new();

    for decl in declarations(params, mode) {
        out.push_str(&decl.to_string());
        out.push('\n');
    }

    out
}

// the whole text is rendered before the first byte is written
pub fn write_declarations<W: Write>(
    params: &PlatformParams,
    mode: Mode,
    out: &mut W,
) -> std::io::Result<()> {
    let text = render(params, mode);

    out.write_all(text.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hardware_rendering() {
        let text = render(&PlatformParams::populate(), Mode::Hardware);

        assert_eq!(
            text,
            "#define LogInstrMemSize 11\n\
             #define LogStackSize 11\n\
             #define LogHeapSize 13\n\
             #define LogHeapSizeMinusOne 12\n\
             #define LogScratchpadSizeMinusOne 11\n\
             #define GCThreshold 3040\n"
        );
    }

    #[test]
    fn software_rendering() {
        let text = render(&PlatformParams::populate(), Mode::Software);

        assert_eq!(
            text,
            "#define ActLogInstrMemSize 11\n\
             #define ActLogStackSize 11\n\
             #define ActLogHeapSize 13\n\
             #define ActLogHeapSizeMinusOne 12\n\
             #define ActLogScratchpadSizeMinusOne 11\n\
             #define ActGCThreshold 3040\n"
        );
    }

    #[test]
    fn software_lines_are_prefixed_hardware_lines() {
        let params = PlatformParams::populate();
        let hw = render(&params, Mode::Hardware);
        let sw = render(&params, Mode::Software);

        for (hw_line, sw_line) in hw.lines().zip(sw.lines()) {
            let expected = hw_line.replacen("#define ", "#define Act", 1);
            assert_eq!(sw_line, expected);
        }
        assert_eq!(hw.lines().count(), PlatformParams::LEN);
        assert_eq!(sw.lines().count(), PlatformParams::LEN);
    }

    #[test]
    fn line_shape() {
        for mode in Mode::ALL {
            for line in render(&PlatformParams::populate(), mode).lines() {
                let parts: Vec<&str> = line.split(' ').collect();

                assert_eq!(parts.len(), 3, "{}", line);
                assert_eq!(parts[0], "#define");
                assert!(parts[1].starts_with(mode.prefix()));
                assert!(parts[2].parse::<i64>().is_ok(), "{}", line);
            }
        }
    }

    #[test]
    fn hardware_names_have_no_prefix() {
        for decl in declarations(&PlatformParams::populate(), Mode::Hardware) {
            assert!(!decl.to_string().starts_with("#define Act"));
        }
    }

    #[test]
    fn negative_values_render_in_decimal() {
        let base = crate::params::BaseParams::new(4, 4, 2).unwrap();
        let text = render(&PlatformParams::derive(base), Mode::Hardware);

        assert!(text.ends_with("#define GCThreshold -38\n"));
    }

    #[test]
    fn mode_tokens() {
        assert_eq!("hw-cpp".parse::<Mode>(), Ok(Mode::Hardware));
        assert_eq!("cpp".parse::<Mode>(), Ok(Mode::Software));
        assert_eq!(
            "hw".parse::<Mode>(),
            Err(UnknownMode("hw".to_string()))
        );
        assert!("CPP".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());

        for mode in Mode::ALL {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn write_declarations_matches_render() {
        let params = PlatformParams::populate();
        let mut buf: Vec<u8> = Vec::new();

        write_declarations(&params, Mode::Software, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), render(&params, Mode::Software));
    }
}
