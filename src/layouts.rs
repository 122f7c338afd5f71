use crate::error::{TmResult, TypometerError};
use crate::geometry::{Finger, Pos, FINGER_COUNT, HOME_SLOTS, SPACE_SLOT, STANDARD_SLOTS};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum KnownLayout {
    Qwerty,
    Dvorak,
    Colemak,
}

impl KnownLayout {
    // Maps onto the standard 30-key row-stagger, top row first.
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Qwerty => "qwertyuiopasdfghjkl;zxcvbnm,./",
            Self::Dvorak => "',.pyfgcrlaoeuidhtns;qjkxbmwvz",
            Self::Colemak => "qwfpgjluy;arstdhneiozxcvbkm,./",
        }
    }
}

/// A character bound to a physical key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Key {
    pub ch: char,
    pub pos: Pos,
    pub finger: Finger,
}

/// Immutable keyboard layout: which key types each character, and where
/// each finger rests. Loaded once and shared read-only across runs.
#[derive(Debug, Clone)]
pub struct Layout {
    pub name: String,
    keys: HashMap<char, Key>,
    homes: [Pos; FINGER_COUNT],
}

/// Shifted characters resolve to the key that produces them unshifted.
fn fold(c: char) -> char {
    if c.is_ascii_uppercase() {
        return c.to_ascii_lowercase();
    }
    match c {
        ':' => ';',
        '<' => ',',
        '>' => '.',
        '?' => '/',
        '"' => '\'',
        _ => c,
    }
}

impl Layout {
    /// A builtin layout on the standard 30-key geometry plus space.
    pub fn builtin(which: KnownLayout) -> Self {
        let mut keys = HashMap::new();
        for (slot, ch) in STANDARD_SLOTS.iter().zip(which.get_str().chars()) {
            keys.insert(
                ch,
                Key {
                    ch,
                    pos: slot.pos,
                    finger: slot.finger,
                },
            );
        }
        keys.insert(
            ' ',
            Key {
                ch: ' ',
                pos: SPACE_SLOT.pos,
                finger: SPACE_SLOT.finger,
            },
        );

        // Thumbs rest on space; the other eight fingers on the home row.
        let mut homes = [SPACE_SLOT.pos; FINGER_COUNT];
        for (finger, idx) in HOME_SLOTS {
            homes[finger.index()] = STANDARD_SLOTS[idx].pos;
        }

        Layout {
            name: which.to_string(),
            keys,
            homes,
        }
    }

    /// Resolve a `--layout` argument: builtin name first, then a file path.
    pub fn resolve(source: &str) -> TmResult<Self> {
        if let Ok(known) = KnownLayout::from_str(source) {
            debug!(layout = source, "using builtin layout");
            return Ok(Self::builtin(known));
        }
        let path = Path::new(source);
        if path.is_file() {
            return Self::from_csv_file(path);
        }
        Err(TypometerError::LayoutNotFound(source.to_string()))
    }

    /// Load a layout from a CSV file with the columns
    /// `name,pressed,shifted,finger,home,x,y,width,height`.
    ///
    /// Keys without an explicit position continue rightward from the
    /// previous key. A row may leave `pressed` empty to place a key (or a
    /// home position) without binding a character to it.
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> TmResult<Self> {
        let name = path
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());

        let mut rdr = csv::ReaderBuilder::new().from_path(&path)?;

        let mut keys: HashMap<char, Key> = HashMap::new();
        let mut homes: [Option<Pos>; FINGER_COUNT] = [None; FINGER_COUNT];

        let mut prev_x = 0.0f32;
        let mut prev_y = 0.0f32;
        let mut prev_w = 0.0f32;

        for record in rdr.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let field = |i: usize| record.get(i).unwrap_or("");

            let finger_raw = field(3);
            let finger = finger_raw
                .parse::<usize>()
                .ok()
                .and_then(Finger::from_repr)
                .ok_or_else(|| {
                    TypometerError::LayoutFormat(format!(
                        "line {}: invalid finger '{}' (expected 0..{})",
                        line,
                        finger_raw,
                        FINGER_COUNT - 1
                    ))
                })?;
            let is_home = !field(4).is_empty();

            let x = field(5).parse().unwrap_or(prev_x + prev_w);
            let y = field(6).parse().unwrap_or(prev_y);
            let w = field(7).parse().unwrap_or(1.0);
            prev_x = x;
            prev_y = y;
            prev_w = w;

            let pos = Pos { x, y };

            if is_home {
                if homes[finger.index()].is_some() {
                    return Err(TypometerError::LayoutFormat(format!(
                        "line {}: {} has more than one home key",
                        line, finger
                    )));
                }
                homes[finger.index()] = Some(pos);
            }

            let pressed = field(1).chars().next();
            let shifted = field(2).chars().next().filter(|s| Some(*s) != pressed);
            for ch in [pressed, shifted].into_iter().flatten() {
                if keys.insert(ch, Key { ch, pos, finger }).is_some() {
                    return Err(TypometerError::LayoutFormat(format!(
                        "line {}: duplicate key '{}'",
                        line, ch
                    )));
                }
            }
        }

        if keys.is_empty() {
            return Err(TypometerError::LayoutFormat(
                "layout file defines no keys".to_string(),
            ));
        }

        let mut resolved = [Pos::default(); FINGER_COUNT];
        for finger in Finger::iter() {
            resolved[finger.index()] = homes[finger.index()].ok_or_else(|| {
                TypometerError::LayoutFormat(format!("{} has no home key", finger))
            })?;
        }

        debug!(layout = %name, keys = keys.len(), "layout file loaded");
        Ok(Layout {
            name,
            keys,
            homes: resolved,
        })
    }

    /// Find the key for a character. Uppercase letters and shifted
    /// punctuation fold to their base key unless the layout maps them
    /// directly. `None` means the character is unmapped, which callers
    /// handle by policy; it is not an error.
    pub fn lookup(&self, c: char) -> Option<&Key> {
        self.keys.get(&c).or_else(|| self.keys.get(&fold(c)))
    }

    pub fn home(&self, finger: Finger) -> Pos {
        self.homes[finger.index()]
    }

    pub fn homes(&self) -> &[Pos; FINGER_COUNT] {
        &self.homes
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}
