//! Display mode of the panel
//!
//! The JLT4013A drives a single fixed mode; pixel data reaches the glass over
//! a parallel RGB bus that is outside this driver. The descriptor is exposed
//! so the surrounding display stack can program its pixel pipeline.

/// Pixel format on the parallel RGB bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusFormat {
    /// 8 bit per channel RGB on a 24 line bus
    Rgb888,
}

/// Clock edge on which the panel latches pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixdataEdge {
    /// data is driven on the rising pixel clock edge
    Rising,
    /// data is driven on the falling pixel clock edge
    Falling,
}

/// Timing and geometry of one display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    /// pixel clock in kHz
    pub clock: u32,
    /// horizontal active pixels
    pub hdisplay: u16,
    /// horizontal sync start
    pub hsync_start: u16,
    /// horizontal sync end
    pub hsync_end: u16,
    /// horizontal total
    pub htotal: u16,
    /// vertical active lines
    pub vdisplay: u16,
    /// vertical sync start
    pub vsync_start: u16,
    /// vertical sync end
    pub vsync_end: u16,
    /// vertical total
    pub vtotal: u16,
    /// physical width in mm
    pub width_mm: u16,
    /// physical height in mm
    pub height_mm: u16,
    /// bits per color channel
    pub bpc: u8,
    /// pixel format on the bus
    pub bus_format: BusFormat,
    /// pixel data latch edge
    pub pixdata_edge: PixdataEdge,
}

/// The single mode supported by the JLT4013A
pub const JLT4013A_MODE: DisplayMode = DisplayMode {
    clock: 14616,
    hdisplay: 480,
    hsync_start: 480 + 32,      // 512
    hsync_end: 480 + 32 + 11,   // 523
    htotal: 480 + 32 + 11 + 2,  // 525
    vdisplay: 800,
    vsync_start: 800 + 54,      // 854
    vsync_end: 800 + 54 + 41,   // 895
    vtotal: 800 + 54 + 41 + 33, // 928
    width_mm: 52,
    height_mm: 86,
    bpc: 8,
    bus_format: BusFormat::Rgb888,
    pixdata_edge: PixdataEdge::Rising,
};
