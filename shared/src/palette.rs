use crate::era::EraBucket;

/// Fill/stroke pair used to paint a lighthouse icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
}

const SEPIA: EraStyle = EraStyle {
    fill: "#7a4e2d",
    stroke: "#3a2414",
};
const NAVY: EraStyle = EraStyle {
    fill: "#2f5d7c",
    stroke: "#102a43",
};
const DEEP_GREEN: EraStyle = EraStyle {
    fill: "#2d6a4f",
    stroke: "#0b3d2e",
};
const GRAY: EraStyle = EraStyle {
    fill: "#6b7280",
    stroke: "#111827",
};

pub fn style_for(bucket: EraBucket) -> EraStyle {
    match bucket {
        EraBucket::Before1900 => SEPIA,
        EraBucket::TwentiethCentury => NAVY,
        EraBucket::Modern => DEEP_GREEN,
        EraBucket::Unknown => GRAY,
    }
}

/// Lookup by bucket label, the form the era appears in on screen.
/// Unrecognized or missing names get the `Unknown` style.
pub fn style_for_label(label: Option<&str>) -> EraStyle {
    label
        .and_then(EraBucket::from_label)
        .map(style_for)
        .unwrap_or(GRAY)
}
