//! Style strings used by the diagrams.

/// Page background: off-white fill with a heavy black border.
pub const BACKGROUND: &str = "fill:snow;stroke:black;stroke-width:3";

/// Thin gray strokes for axes and other guides.
pub const GUIDE: &str = "fill:none;stroke:gray;stroke-width:1";

/// Heavy black strokes for the mechanism itself.
pub const MECHANISM: &str = "fill:none;stroke:black;stroke-width:3";

/// Solid black fill for joint markers.
pub const JOINT: &str = "fill:black";

/// Text style anchored by `anchor` (`start`, `middle` or `end`), vertically centred.
pub fn text_style(anchor: &str) -> String {
    [
        "text-anchor:",
        anchor,
        ";font-size:20px;fill:black;stroke-width:1",
        ";alignment-baseline:middle",
    ]
    .concat()
}
