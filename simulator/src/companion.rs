//! Simulated phone companion: builds configuration messages from keyboard
//! actions and hands back the encoded bytes the watch would receive.

use modern_classic_face::AppearanceState;
use modern_classic_face::appearance::DisplayOptions;
use modern_classic_face::localization::LanguageSelection;
use modern_classic_face::protocol::companion::{CompanionSettings, PickerColors};
use modern_classic_face::protocol::dictionary::{self, EncodeError, MAX_MESSAGE_LEN};
use modern_classic_face::protocol::{ConfigUpdate, encode_update};

/// Settings page presets cycled through by the theme key.
pub const THEMES: [(&str, PickerColors<'static>); 3] = [
    (
        "classic",
        PickerColors {
            elapsed_outer: "#AA0000",
            elapsed_outer_background: "#AAAAAA",
            elapsed_inner: "#0000FF",
            elapsed_inner_background: "#AAAAAA",
            elapsed_background: "#AAAAAA",
            innermost_background: "#FFFFFF",
            innermost_text: "#000000",
            hour_hand: "#0000FF",
            minute_hand: "#AA0000",
            complication_month: "#555555",
            complication_date: "#555555",
            complication_day: "#555555",
            complication_battery: "#555555",
            complication_battery_error: "#AA0000",
            background: "#FFFFFF",
            outer_background: "#FFFFFF",
        },
    ),
    (
        "night",
        PickerColors {
            elapsed_outer: "#00AAFF",
            elapsed_outer_background: "#005555",
            elapsed_inner: "#FFAA00",
            elapsed_inner_background: "#555500",
            elapsed_background: "#555555",
            innermost_background: "#000000",
            innermost_text: "#FFFFFF",
            hour_hand: "#FFAA00",
            minute_hand: "#00AAFF",
            complication_month: "#AAAAAA",
            complication_date: "#FFFFFF",
            complication_day: "#AAAAAA",
            complication_battery: "#AAAAAA",
            complication_battery_error: "#FF5555",
            background: "#000000",
            outer_background: "#000000",
        },
    ),
    (
        "mint",
        PickerColors {
            elapsed_outer: "#00AA55",
            elapsed_outer_background: "#AAFFAA",
            elapsed_inner: "#005500",
            elapsed_inner_background: "#AAFFAA",
            elapsed_background: "#AAFFAA",
            innermost_background: "#005500",
            innermost_text: "#AAFFAA",
            hour_hand: "#005500",
            minute_hand: "#00AA55",
            complication_month: "#005500",
            complication_date: "#005500",
            complication_day: "#005500",
            complication_battery: "#005500",
            complication_battery_error: "#AA0000",
            background: "#FFFFFF",
            outer_background: "#55AA55",
        },
    ),
];

/// Encoded configuration message.
pub type Message = heapless::Vec<u8, MAX_MESSAGE_LEN>;

/// Settings page submission for preset `index`, keeping the current options.
pub fn theme_message(
    index: usize,
    current: &AppearanceState,
) -> Result<Message, EncodeError> {
    let (_, colors) = THEMES[index % THEMES.len()];
    let settings = CompanionSettings {
        colors,
        options: current.options,
        // The mint preset uses its own ring colors
        custom_arc_colors: index % THEMES.len() == 2,
        hour_hand_width: current.dimensions.hour_hand_width,
        minute_hand_width: current.dimensions.minute_hand_width,
        language: current.language,
    };
    encode(&settings.to_update())
}

/// Full-state message with one display option changed.
pub fn options_message(
    current: &AppearanceState,
    edit: impl FnOnce(&mut DisplayOptions),
) -> Result<Message, EncodeError> {
    let mut next = *current;
    edit(&mut next.options);
    encode(&encode_update(&next))
}

/// Full-state message selecting the language after the current one.
///
/// Cycles automatic, then every fixed language in wire id order.
pub fn next_language_message(current: &AppearanceState) -> Result<Message, EncodeError> {
    let mut next = *current;
    next.language = LanguageSelection::from_id(current.language.id() + 1);
    encode(&encode_update(&next))
}

/// Full-state message restoring every default.
pub fn reset_message() -> Result<Message, EncodeError> { encode(&encode_update(&AppearanceState::default())) }

fn encode(update: &ConfigUpdate) -> Result<Message, EncodeError> {
    dictionary::encode(update)
}
