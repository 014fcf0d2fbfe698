//! Text templates, one per view.
//!
//! Every template receives the command's view as `view`. Line breaks follow
//! the template text; block tags on their own line leave no trace.

pub const TOKENS: &str = r#"{% for section in view.sections %}
{{ section.title | style("section") }}
{% for token in section.tokens %}
  {{ token.name | pad(width) | style("name") }}  {{ token.resolved | swatch }}{{ token.value | style("value") }}{{ (("  = " ~ token.resolved) if token.resolved != token.value else "") | style("muted") }}
{% endfor %}

{% else %}
{{ "No tokens to show." | style("muted") }}
{% endfor %}
{{ (view.count ~ " tokens, theme " ~ view.theme) | style("muted") }}
"#;

pub const PALETTE: &str = r#"{% for set in view.sets %}
{{ set.title | style("header") }}
{% for family in set.families %}
  {{ family.label | style("section") }}
{% for swatch in family.swatches %}
    {{ swatch.value | swatch }}{{ swatch.step | pad(4) | style("muted") }} {{ swatch.value | pad(24) | style("value") }} {{ swatch.property | style("name") }}
{% endfor %}
{% else %}
  {{ "No ramps in this set." | style("muted") }}
{% endfor %}

{% endfor %}
{{ ("theme " ~ view.theme) | style("muted") }}
"#;

pub const THEMES: &str = r#"{% for theme in view.themes %}
{{ "* " if theme.active else "  " }}{{ theme.name | style("active" if theme.active else "name") }}{{ ("  (" ~ theme.overrides ~ " overrides)" if theme.overrides else "") | style("muted") }}
{% endfor %}
"#;

pub const USE: &str = r#"Theme set to {{ view.theme | style("active") }}
{% if not view.stored %}
{{ ("Preference could not be saved to " ~ view.path) | style("warn") }}
{% endif %}
"#;

pub const COPY: &str = r#"{{ view.message | style("ok" if view.copied else "warn") }}
"#;

pub const BANNER: &str = r#"{{ "Stylesheet unavailable:" | style("error") }} {{ view.headline }}
{% for attempt in view.attempts %}
  {{ attempt.location | style("name") }}  {{ attempt.outcome | style("muted") }}
{% else %}
  {{ "no candidate locations" | style("muted") }}
{% endfor %}
"#;

/// Registered templates by name.
pub const ALL: &[(&str, &str)] = &[
    ("tokens", TOKENS),
    ("palette", PALETTE),
    ("themes", THEMES),
    ("use", USE),
    ("copy", COPY),
    ("banner", BANNER),
];
