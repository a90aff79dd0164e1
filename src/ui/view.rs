//! Text rendering of the app state.
//!
//! Rendering is where resources are read. The suspense boundary around the
//! info panel turns a pending read into the fallback and a failed read into
//! the error view.

use crate::pokemon::{FetchError, Pokemon, PokemonResource};
use crate::resource::ReadOutcome;
use crate::ui::app::AppState;

/// One rendered screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<String>,
    /// The pending indicator is on.
    pub busy: bool,
}

impl Frame {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// Render the whole screen: form line, separator, info panel.
pub fn render(state: &AppState) -> Frame {
    let mut lines = vec![format!("Pokemon name: {}", state.pokemon_name), "-".repeat(40)];

    match &state.resource {
        None => lines.push("Submit a pokemon".to_string()),
        Some(resource) => lines.extend(render_boundary(resource, &state.pokemon_name)),
    }

    Frame {
        lines,
        busy: state.is_pending(),
    }
}

fn render_boundary(resource: &PokemonResource, name: &str) -> Vec<String> {
    match resource.read() {
        ReadOutcome::Ready(pokemon) => render_pokemon(&pokemon),
        ReadOutcome::Pending(_) => render_fallback(name),
        ReadOutcome::Failed(failure) => render_error(failure.get_ref()),
    }
}

fn render_fallback(name: &str) -> Vec<String> {
    let name = if name.is_empty() { "..." } else { name };
    vec![format!("Loading {}...", name)]
}

fn render_error(error: &FetchError) -> Vec<String> {
    vec![
        "There was an error:".to_string(),
        format!("  {}", error),
        "Try again (submit an empty line to reset)".to_string(),
    ]
}

fn render_pokemon(pokemon: &Pokemon) -> Vec<String> {
    let mut lines = vec![
        format!("{} #{}", pokemon.name, pokemon.number),
        format!("image: {}", pokemon.image),
    ];

    if !pokemon.attacks.special.is_empty() {
        let width = pokemon
            .attacks
            .special
            .iter()
            .map(|a| a.name.len())
            .max()
            .unwrap_or(0)
            .max("Ability".len());
        lines.push(format!("{:<width$}  {:<10}  {}", "Ability", "Type", "Damage"));
        for attack in &pokemon.attacks.special {
            lines.push(format!(
                "{:<width$}  {:<10}  {}",
                attack.name, attack.kind, attack.damage
            ));
        }
    }

    if !pokemon.fetched_at.is_empty() {
        lines.push(format!("fetched at {}", pokemon.fetched_at));
    }
    lines
}
