//! Validation for smaller config sections: server, capture, speaker.

use crate::schema::VigilConfig;

use super::helpers::{validate_http_url, validate_range};

pub(crate) fn validate_server(errors: &mut Vec<String>, config: &VigilConfig) {
    validate_http_url(errors, "server.base_url", &config.server.base_url);
    validate_range(
        errors,
        "server.connect_timeout_secs",
        config.server.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "server.request_timeout_secs",
        config.server.request_timeout_secs,
        1,
        600,
    );
}

pub(crate) fn validate_capture(errors: &mut Vec<String>, config: &VigilConfig) {
    validate_range(
        errors,
        "capture.max_thumbnails",
        config.capture.max_thumbnails,
        1,
        100,
    );
}

pub(crate) fn validate_speaker(errors: &mut Vec<String>, config: &VigilConfig) {
    validate_http_url(errors, "speaker.base_url", &config.speaker.base_url);
    validate_range(
        errors,
        "speaker.default_volume",
        config.speaker.default_volume,
        0,
        100,
    );
}
