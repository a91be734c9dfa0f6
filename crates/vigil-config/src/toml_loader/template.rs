//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Vigil Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[server]
# base_url = "http://127.0.0.1:5000"
# connect_timeout_secs = 10     # 1-120
# request_timeout_secs = 120    # 1-600

[assistant]
# enabled = true
# capture_window_ms = 5000      # 1000-60000, length of each listening window
# reply_delay_ms = 500          # 0-10000, pause after a reply before listening again
# retry_backoff_ms = 1000       # 0-10000, pause after a failed round-trip
# clip_filename = "recording.wav"
# system_prompt = "You are a disaster-response assistant. Be extremely concise."

[capture]
# max_thumbnails = 12           # 1-100

[speaker]
# base_url = "http://10.84.160.98:5000"
# default_volume = 70           # 0-100

[logging]
# level = "INFO"                # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
