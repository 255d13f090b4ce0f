//! User-facing message catalog for the panels.
//!
//! Kept in one place so the texts the state machine emits can be swapped for
//! a localized table without touching the update logic.

use crate::Feature;

pub(crate) fn help(feature: Feature) -> &'static str {
    match feature {
        Feature::FrameInterpolation => {
            "Pick input and output directories, choose provider and scale, then press Start."
        }
        Feature::VideoMatting => {
            "Pick input and output directories, choose provider and mode, then press Start."
        }
    }
}

pub(crate) fn completed(feature: Feature) -> &'static str {
    match feature {
        Feature::FrameInterpolation => "Frame interpolation completed.",
        Feature::VideoMatting => "Video matting completed.",
    }
}
