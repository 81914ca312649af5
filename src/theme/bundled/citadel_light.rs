//! Citadel Light - bright theme for light terminals

pub const THEME: &str = r##"# Citadel Light theme for cardex
# Clean council-chamber whites with muted accents

[meta]
name = "Citadel Light"

[ui]
background = "#f6f5f1"
foreground = "#2d2f36"
border = "#cfcdc6"
border_focused = "#2f7fa8"
title = "#2f7fa8"
status_bar = "#4b4f59"
selection_bg = "#dde9ef"
selection_fg = "#1c1e24"
muted = "#8a8c93"
border_type = "plain"

[status]
alive = "#3d8b37"
dead = "#b8383f"
unknown = "#6d707a"

[states]
loading = "#b7791f"
error = "#b8383f"

[panels]
grid = "#2f7fa8"
detail = "#3d8b37"
logs = "#7c4ea8"
"##;
