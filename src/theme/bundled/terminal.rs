//! Terminal - inherits the terminal's own ANSI palette

pub const THEME: &str = r##"# Terminal theme for cardex
# Uses your terminal's native ANSI colors:
# - ansi:0-7 = standard colors, ansi:8-15 = bright variants
# - ansi:fg / ansi:bg = terminal defaults

[meta]
name = "Terminal"

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
border = "ansi:8"
border_focused = "ansi:3"
title = "ansi:6"
status_bar = "ansi:fg"
selection_bg = "ansi:8"
selection_fg = "ansi:fg"

[status]
alive = "ansi:2"
dead = "ansi:1"
unknown = "ansi:7"

[states]
loading = "ansi:3"
error = "ansi:1"

[panels]
grid = "ansi:6"
detail = "ansi:2"
logs = "ansi:5"
"##;
