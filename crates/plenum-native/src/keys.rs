//! Keyboard shortcuts for editing the box without a form.

use plenum_core::BoxSpec;

/// Lip sizes offered by the storefront, in inches.
pub const LIP_CYCLE: [f32; 4] = [0.0, 0.5, 1.0, 1.5];
pub const HEIGHT_STEP: f32 = 1.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleEndCap,
    CycleLip,
    TallerBy1,
    ShorterBy1,
    Zone(String),
    ResetCamera,
    HomeCamera,
}

pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "e" | "E" => Some(KeyCommand::ToggleEndCap),
        "l" | "L" => Some(KeyCommand::CycleLip),
        "+" | "=" => Some(KeyCommand::TallerBy1),
        "-" | "_" => Some(KeyCommand::ShorterBy1),
        "r" | "R" => Some(KeyCommand::ResetCamera),
        "f" | "F" => Some(KeyCommand::HomeCamera),
        d if d.len() == 1 && matches!(d.as_bytes()[0], b'1'..=b'9') => {
            Some(KeyCommand::Zone(d.to_string()))
        }
        _ => None,
    }
}

/// Next lip size after `current`, wrapping back to no lip.
pub fn next_lip(current: f32) -> f32 {
    LIP_CYCLE
        .iter()
        .copied()
        .find(|l| *l > current + 1e-3)
        .unwrap_or(LIP_CYCLE[0])
}

/// Spec after a shape edit, or `None` for commands that do not touch the box.
pub fn edited_spec(spec: &BoxSpec, command: &KeyCommand) -> Option<BoxSpec> {
    let edited = match command {
        KeyCommand::ToggleEndCap => spec.with_end_cap(!spec.end_cap),
        KeyCommand::CycleLip => spec.with_lip_size(next_lip(spec.lip_size)),
        KeyCommand::TallerBy1 => BoxSpec {
            height: spec.height + HEIGHT_STEP,
            ..*spec
        },
        KeyCommand::ShorterBy1 => BoxSpec {
            height: spec.height - HEIGHT_STEP,
            ..*spec
        },
        _ => return None,
    };
    Some(edited.clamped())
}
