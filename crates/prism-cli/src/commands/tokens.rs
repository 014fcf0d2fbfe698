use anyhow::Result;
use prism_tokens::{
    classify, resolve_value, Catalog, Category, PropertyMap, Subcategory, TokenType,
};
use serde::Serialize;

use super::{emit, load_or_report, Io, Status};
use crate::cli::TokensArgs;
use crate::render::Renderer;
use crate::session::Session;

#[derive(Debug, Serialize)]
pub struct TokensView {
    pub theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub count: usize,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub title: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<Subcategory>,
    pub tokens: Vec<TokenView>,
}

#[derive(Debug, Serialize)]
pub struct TokenView {
    pub name: String,
    pub value: String,
    /// Value with `var()` references expanded for the theme.
    pub resolved: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

/// Builds the catalog view of one theme's effective map.
pub fn build_view(theme: &str, effective: &PropertyMap, args: &TokensArgs) -> TokensView {
    let mut catalog = classify(effective);
    if let Some(query) = &args.filter {
        catalog = catalog.filter(query);
    }
    let sections: Vec<SectionView> = sections(&catalog, args.category)
        .map(|section| SectionView {
            title: section.title(),
            category: section.category,
            subcategory: section.subcategory,
            tokens: section
                .properties
                .iter()
                .map(|p| TokenView {
                    name: p.name.clone(),
                    value: p.value.clone(),
                    resolved: resolve_value(&p.value, effective),
                    token_type: p.token_type,
                })
                .collect(),
        })
        .collect();

    TokensView {
        theme: theme.to_string(),
        category: args.category,
        filter: args.filter.clone(),
        count: sections.iter().map(|s| s.tokens.len()).sum(),
        sections,
    }
}

fn sections(
    catalog: &Catalog,
    only: Option<Category>,
) -> impl Iterator<Item = &prism_tokens::Section> {
    catalog
        .sections()
        .iter()
        .filter(move |s| only.map_or(true, |c| s.category == c))
}

pub fn run(
    session: &Session,
    renderer: &Renderer,
    args: &TokensArgs,
    io: &mut Io<'_>,
) -> Result<Status> {
    let (effective, status) = match load_or_report(session, renderer, io)? {
        Some(loaded) => (loaded.scopes.effective(&session.theme), Status::Success),
        None => (PropertyMap::new(), Status::Failure),
    };

    let view = build_view(&session.theme, &effective, args);
    let width = view
        .sections
        .iter()
        .flat_map(|s| s.tokens.iter())
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0);
    emit(session.mode, renderer, "tokens", &view, width, io.out)?;
    Ok(status)
}
