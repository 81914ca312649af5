//! Portal Dark - the default theme
//! Deep space background with portal-green accents

pub const THEME: &str = r##"# Portal Dark theme for cardex
# Deep space background with portal-green accents

[meta]
name = "Portal Dark"

[ui]
background = "#1b1e24"
foreground = "#d7dce2"
border = "#363b45"
border_focused = "#97ce4c"
title = "#97ce4c"
status_bar = "#a9b1bc"
selection_bg = "#2f3a2a"
selection_fg = "#f1f5e8"
muted = "#7c8490"
border_type = "rounded"

[status]
alive = "#97ce4c"
dead = "#e4606d"
unknown = "#a9b1bc"

[states]
loading = "#f0c35b"
error = "#e4606d"

[panels]
grid = "#44b4c9"
detail = "#97ce4c"
logs = "#c39ae8"
"##;
