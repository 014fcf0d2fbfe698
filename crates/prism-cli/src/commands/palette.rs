use anyhow::Result;
use prism_tokens::{build_palettes, Family, PaletteKind, PropertyMap, ThemeScopes};
use serde::Serialize;

use super::{emit, load_or_report, Io, Status};
use crate::cli::PaletteArgs;
use crate::render::Renderer;
use crate::session::Session;

#[derive(Debug, Serialize)]
pub struct PaletteView {
    pub theme: String,
    pub sets: Vec<SetView>,
}

#[derive(Debug, Serialize)]
pub struct SetView {
    pub kind: PaletteKind,
    pub title: &'static str,
    pub families: Vec<FamilyView>,
}

#[derive(Debug, Serialize)]
pub struct FamilyView {
    pub id: String,
    pub label: String,
    pub swatches: Vec<SwatchView>,
}

#[derive(Debug, Serialize)]
pub struct SwatchView {
    pub step: String,
    pub property: String,
    /// Value for the active theme, references expanded.
    pub value: String,
}

fn title(kind: PaletteKind) -> &'static str {
    match kind {
        PaletteKind::General => "General",
        PaletteKind::Alpha => "Alpha",
        PaletteKind::Chart => "Chart",
    }
}

/// Builds palette rows from the base theme and resolves every swatch against
/// the active theme.
pub fn build_view(theme: &str, scopes: &ThemeScopes, only: Option<PaletteKind>) -> PaletteView {
    let palettes = build_palettes(scopes.base());
    let effective = scopes.effective(theme);
    let kinds: Vec<PaletteKind> = match only {
        Some(kind) => vec![kind],
        None => PaletteKind::ALL.to_vec(),
    };

    PaletteView {
        theme: theme.to_string(),
        sets: kinds
            .into_iter()
            .map(|kind| SetView {
                kind,
                title: title(kind),
                families: palettes
                    .get(kind)
                    .iter()
                    .map(|f| family_view(f, &effective))
                    .collect(),
            })
            .collect(),
    }
}

fn family_view(family: &Family, effective: &PropertyMap) -> FamilyView {
    FamilyView {
        id: family.id.clone(),
        label: family.label.clone(),
        swatches: family
            .swatches
            .iter()
            .map(|s| SwatchView {
                step: s.step.clone(),
                property: s.property.clone(),
                value: s.resolve(effective),
            })
            .collect(),
    }
}

pub fn run(
    session: &Session,
    renderer: &Renderer,
    args: &PaletteArgs,
    io: &mut Io<'_>,
) -> Result<Status> {
    let (scopes, status) = match load_or_report(session, renderer, io)? {
        Some(loaded) => (loaded.scopes, Status::Success),
        None => (ThemeScopes::new(), Status::Failure),
    };
    let view = build_view(&session.theme, &scopes, args.set);
    emit(session.mode, renderer, "palette", &view, 0, io.out)?;
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputMode;
    use minijinja::context;
    use prism_tokens::{extract, ExtractOptions};

    fn scopes() -> ThemeScopes {
        let css = ":root{--prism-color-chart-sequential-info-01:#e0f2fe;\
                   --prism-color-chart-sequential-info-02:#b3e5fc;\
                   --prism-color-red-500:#e00;}\
                   :root[data-theme=dark]{--prism-color-chart-sequential-info-01:#012;}";
        extract(css, &["light", "dark"], &ExtractOptions::default())
    }

    #[test]
    fn test_swatches_follow_theme() {
        let view = build_view("dark", &scopes(), Some(PaletteKind::Chart));
        assert_eq!(view.sets.len(), 1);
        let info = &view.sets[0].families[0];
        assert_eq!(info.id, "info");
        let values: Vec<&str> = info.swatches.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["#012", "#b3e5fc"]);
    }

    #[test]
    fn test_all_sets_by_default() {
        let view = build_view("light", &scopes(), None);
        let kinds: Vec<PaletteKind> = view.sets.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, PaletteKind::ALL.to_vec());
        assert!(view.sets[1].families.is_empty());
    }

    #[test]
    fn test_text_rendering() {
        let renderer = Renderer::new(OutputMode::Text).unwrap();
        let view = build_view("light", &scopes(), Some(PaletteKind::General));
        let text = renderer.render("palette", context! { view => view }).unwrap();
        assert_eq!(
            text,
            format!(
                "General\n  Red\n    500  {:<24} --prism-color-red-500\n\ntheme light\n",
                "#e00"
            )
        );
    }
}
