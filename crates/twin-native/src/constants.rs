/// Native renderer tuning.
///
/// Colors are linear RGBA handed straight to the line shader.
pub const WINDOW_TITLE: &str = "Twin Paradox (native)";
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.015,
    g: 0.02,
    b: 0.04,
    a: 1.0,
};

// Fraction of the viewport span left empty around the diagram
pub const FRAME_PADDING: f32 = 0.03;

// Marker half-size as a fraction of the viewport span
pub const MARKER_SIZE: f64 = 0.012;
pub const SMALL_MARKER_SIZE: f64 = 0.005;

// Dash length in lab units (years / light-years)
pub const DASH_LENGTH: f64 = 0.15;

pub const AXIS_COLOR: [f32; 4] = [0.58, 0.64, 0.72, 0.6];
pub const STATIONARY_COLOR: [f32; 4] = [0.23, 0.51, 0.96, 1.0];
pub const TRAVELER_COLOR: [f32; 4] = [0.94, 0.27, 0.27, 1.0];
pub const GHOST_COLOR: [f32; 4] = [0.94, 0.27, 0.27, 0.3];
pub const DESTINATION_COLOR: [f32; 4] = [0.58, 0.64, 0.72, 0.5];
pub const LIGHT_COLOR: [f32; 4] = [0.98, 0.75, 0.14, 0.5];
pub const SIMULTANEITY_COLOR: [f32; 4] = [0.06, 0.73, 0.51, 1.0];
pub const STATIONARY_SIGNAL_COLOR: [f32; 4] = [0.38, 0.65, 0.98, 1.0];
pub const TRAVELER_SIGNAL_COLOR: [f32; 4] = [0.97, 0.44, 0.44, 1.0];

// RGB only; alpha comes from the frame's emphasis
pub const GRID_OUTBOUND_RGB: [f32; 3] = [0.13, 0.83, 0.93];
pub const GRID_INBOUND_RGB: [f32; 3] = [0.65, 0.55, 0.98];

// Vertex buffer starts with room for this many vertices and doubles as needed
pub const INITIAL_VERTEX_CAPACITY: usize = 4096;
