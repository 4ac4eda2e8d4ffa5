// DOM ids and form names the page is expected to provide

pub const CANVAS_ID: &str = "plenum-canvas";
pub const CONTROLS_ID: &str = "controls";
pub const COST_DISPLAY_ID: &str = "costDisplay";

pub const WIDTH_A_ID: &str = "widthA";
pub const WIDTH_B_ID: &str = "widthB";
pub const HEIGHT_ID: &str = "height";
pub const DIMENSION_INPUT_IDS: [&str; 3] = [WIDTH_A_ID, WIDTH_B_ID, HEIGHT_ID];

// radio groups (by name attribute)
pub const END_CAP_NAME: &str = "endCap";
pub const LIP_SIZE_NAME: &str = "lipSize";
pub const ZIP_DIGIT_NAME: &str = "zipDigit";

// DOM MouseEvent.button values
pub const BUTTON_PRIMARY: i16 = 0;
pub const BUTTON_SECONDARY: i16 = 2;
