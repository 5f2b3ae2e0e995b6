/// Canvas drawing constants.
///
/// Colors are CSS strings handed straight to the 2D context. Sizes are CSS
/// pixels and get multiplied by `devicePixelRatio` when drawing.
// Plot margins around the diagram (top, right, bottom, left)
pub const MARGIN_TOP_PX: f64 = 20.0;
pub const MARGIN_RIGHT_PX: f64 = 30.0;
pub const MARGIN_BOTTOM_PX: f64 = 40.0;
pub const MARGIN_LEFT_PX: f64 = 50.0;

// Axis ticks
pub const TICK_LENGTH_PX: f64 = 6.0;
pub const MAX_AXIS_TICKS: usize = 12;

pub const FONT: &str = "12px system-ui, sans-serif";
pub const FONT_SMALL: &str = "10px system-ui, sans-serif";
pub const FONT_GRID_LABEL: &str = "bold 9px system-ui, sans-serif";

pub const BACKGROUND: &str = "#0f172a";
pub const AXIS_COLOR: &str = "#94a3b8";
pub const BACKGROUND_GRID: &str = "rgba(148, 163, 184, 0.1)";

pub const STATIONARY_COLOR: &str = "#3b82f6";
pub const TRAVELER_COLOR: &str = "#ef4444";
pub const DESTINATION_COLOR: &str = "rgba(148, 163, 184, 0.5)";
pub const LIGHT_COLOR: &str = "rgba(251, 191, 36, 0.5)";
pub const LIGHT_LABEL_COLOR: &str = "rgba(251, 191, 36, 0.8)";
pub const SIMULTANEITY_COLOR: &str = "#10b981";

pub const STATIONARY_SIGNAL_COLOR: &str = "#60a5fa";
pub const STATIONARY_SIGNAL_RIM: &str = "#1e3a8a";
pub const TRAVELER_SIGNAL_COLOR: &str = "#f87171";
pub const TRAVELER_SIGNAL_RIM: &str = "#7f1d1d";

// RGB triples; alpha comes from the frame's emphasis
pub const GRID_OUTBOUND_RGB: (u8, u8, u8) = (0x22, 0xd3, 0xee);
pub const GRID_INBOUND_RGB: (u8, u8, u8) = (0xa7, 0x8b, 0xfa);

// Stroke widths
pub const WORLD_LINE_WIDTH: f64 = 3.0;
pub const GHOST_LINE_WIDTH: f64 = 1.0;
pub const GHOST_ALPHA: f64 = 0.3;
pub const SIMULTANEITY_WIDTH: f64 = 2.0;
pub const THIN_LINE_WIDTH: f64 = 1.0;
pub const GRID_LINE_WIDTH: f64 = 0.5;

// Marker radii
pub const TRAVELER_MARKER_RADIUS: f64 = 6.0;
pub const STATIONARY_MARKER_RADIUS: f64 = 4.0;
pub const EMISSION_MARKER_RADIUS: f64 = 2.0;
pub const RECEPTION_MARKER_RADIUS: f64 = 3.0;

// Dash patterns
pub const DASH_LIGHT: [f64; 2] = [4.0, 4.0];
pub const DASH_DESTINATION: [f64; 2] = [2.0, 2.0];
pub const DASH_SIGNAL: [f64; 2] = [2.0, 2.0];
pub const DASH_SIMULTANEITY: [f64; 2] = [5.0, 5.0];
pub const DASH_GRID_TIME: [f64; 2] = [4.0, 4.0];
pub const DASH_GRID_POSITION: [f64; 2] = [1.0, 3.0];
