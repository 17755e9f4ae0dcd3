//! Headless editor state machine.
//!
//! [`EditorState`] holds the explicit configuration pair (grid + style), the
//! mask, and the mask-mode flag, and memoizes the generated field on the
//! generator's inputs. User events become plain method calls that produce
//! new configuration values; nothing here renders.

use crate::config::{GridConfig, ImageInfo, Span};
use crate::error::GridError;
use crate::field::{generate, GridField};
use crate::mask::MaskSet;
use crate::recipe::Recipe;
use crate::style::StyleConfig;

/// Opacity used to render masked cells while mask mode is on, as a visual
/// cue that the cell exists but is excluded.
pub const MASKED_DIM_OPACITY: f64 = 0.15;

/// How a single cell should be rendered right now.
///
/// Masking and the global animation flag reclassify cells without touching
/// the generated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Unmasked, animation on: pulses with its generated timing.
    VisibleAnimating,
    /// Unmasked, animation off: rendered at its generated opacity.
    VisibleStatic,
    /// Masked while mask mode is on: rendered at [`MASKED_DIM_OPACITY`].
    MaskedDim,
    /// Masked while mask mode is off: fully transparent.
    MaskedHidden,
}

/// Memoized field keyed on the exact generator inputs that produced it.
#[derive(Debug, Clone)]
struct FieldCache {
    inputs: GridConfig,
    field: GridField,
}

/// The full editable state of one overlay session.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    image: Option<ImageInfo>,
    grid: GridConfig,
    style: StyleConfig,
    mask: MaskSet,
    mask_mode: bool,
    cache: Option<FieldCache>,
    generation: u64,
}

impl EditorState {
    /// A fresh session with default configuration and no image.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a session from a recipe.
    ///
    /// The recipe is validated first; the mask is kept as stored (it is
    /// part of the recipe's reproducibility contract, so this does not go
    /// through [`set_image`](Self::set_image), which would clear it).
    pub fn from_recipe(recipe: Recipe) -> Result<Self, GridError> {
        recipe.validate()?;
        Ok(Self {
            image: Some(recipe.image),
            grid: recipe.grid,
            style: recipe.style,
            mask: recipe.mask,
            mask_mode: false,
            cache: None,
            generation: 0,
        })
    }

    /// Snapshots the current state as a recipe, if an image is loaded.
    pub fn recipe(&self) -> Option<Recipe> {
        self.image.map(|image| Recipe {
            image,
            grid: self.grid.clone(),
            style: self.style.clone(),
            mask: self.mask.clone(),
        })
    }

    /// Loads a new backing image.
    ///
    /// Updates the grid aspect ratio and unconditionally clears the mask:
    /// cell indices are only meaningful for a fixed grid shape, and a
    /// stale mask is never remapped.
    pub fn set_image(&mut self, image: ImageInfo) -> Result<(), GridError> {
        image.validate()?;
        self.image = Some(image);
        self.grid.aspect_ratio = image.aspect_ratio();
        self.mask.clear();
        Ok(())
    }

    pub fn image(&self) -> Option<ImageInfo> {
        self.image
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Mutable access to the style. Style changes never regenerate the
    /// field, so no invalidation is involved.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }

    pub fn mask(&self) -> &MaskSet {
        &self.mask
    }

    // -- Generator input events --

    pub fn set_columns(&mut self, columns: usize) {
        self.grid.columns = columns;
    }

    pub fn set_opacity_range(&mut self, opacity: Span) {
        self.grid.opacity = opacity;
    }

    pub fn set_quantize_levels(&mut self, levels: usize) {
        self.grid.quantize_levels = levels;
    }

    pub fn set_duration_range(&mut self, duration: Span) {
        self.grid.duration = duration;
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.grid.seed = seed;
    }

    // -- Field access --

    /// The generated field for the current configuration.
    ///
    /// Regenerates only when a generator input changed since the last
    /// call; otherwise the cached field is returned by reference.
    pub fn field(&mut self) -> &GridField {
        if self
            .cache
            .as_ref()
            .map_or(true, |cache| cache.inputs != self.grid)
        {
            self.cache = None;
        }
        if self.cache.is_none() {
            self.generation += 1;
        }
        let inputs = self.grid.clone();
        &self
            .cache
            .get_or_insert_with(|| FieldCache {
                field: generate(&inputs),
                inputs,
            })
            .field
    }

    /// Number of distinct field regenerations so far. Observability hook
    /// for the memoization contract.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // -- Masking --

    pub fn mask_mode(&self) -> bool {
        self.mask_mode
    }

    pub fn set_mask_mode(&mut self, enabled: bool) {
        self.mask_mode = enabled;
    }

    /// Toggles a cell's mask membership.
    ///
    /// Accepted only while mask mode is on and the index lies inside the
    /// current cell domain. Returns whether the toggle was applied. Never
    /// regenerates the field or disturbs other cells.
    pub fn toggle_cell(&mut self, index: usize) -> bool {
        if !self.mask_mode || index >= self.grid.cell_count() {
            return false;
        }
        self.mask.toggle(index);
        true
    }

    /// Classifies how `index` should render right now.
    pub fn cell_state(&self, index: usize) -> CellState {
        if self.mask.is_masked(index) {
            if self.mask_mode {
                CellState::MaskedDim
            } else {
                CellState::MaskedHidden
            }
        } else if self.style.animate {
            CellState::VisibleAnimating
        } else {
            CellState::VisibleStatic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with_image() -> EditorState {
        let mut editor = EditorState::new();
        editor.set_image(ImageInfo::new(800, 600)).unwrap();
        editor
    }

    // -- Memoization --

    #[test]
    fn repeated_field_calls_do_not_regenerate() {
        let mut editor = editor_with_image();
        editor.field();
        assert_eq!(editor.generation(), 1);
        editor.field();
        editor.field();
        assert_eq!(editor.generation(), 1);
    }

    #[test]
    fn generator_input_change_regenerates() {
        let mut editor = editor_with_image();
        editor.field();
        editor.set_seed(99);
        editor.field();
        assert_eq!(editor.generation(), 2);
        editor.set_columns(20);
        editor.field();
        assert_eq!(editor.generation(), 3);
    }

    #[test]
    fn style_change_does_not_regenerate() {
        let mut editor = editor_with_image();
        editor.field();
        editor.style_mut().animate = false;
        editor.style_mut().dots.enabled = true;
        editor.field();
        assert_eq!(editor.generation(), 1);
    }

    #[test]
    fn mask_and_mask_mode_do_not_regenerate() {
        let mut editor = editor_with_image();
        editor.field();
        editor.set_mask_mode(true);
        editor.toggle_cell(0);
        editor.field();
        assert_eq!(editor.generation(), 1);
    }

    #[test]
    fn setting_identical_value_does_not_regenerate() {
        let mut editor = editor_with_image();
        editor.field();
        let seed = editor.grid().seed;
        editor.set_seed(seed);
        editor.field();
        assert_eq!(editor.generation(), 1);
    }

    // -- Image changes and the mask --

    #[test]
    fn new_image_with_different_dimensions_clears_mask() {
        let mut editor = editor_with_image();
        editor.set_mask_mode(true);
        assert!(editor.toggle_cell(3));
        assert_eq!(editor.mask().len(), 1);
        editor.set_image(ImageInfo::new(1920, 1080)).unwrap();
        assert!(editor.mask().is_empty());
    }

    #[test]
    fn new_image_updates_aspect_ratio() {
        let mut editor = editor_with_image();
        editor.set_image(ImageInfo::new(1000, 500)).unwrap();
        assert!((editor.grid().aspect_ratio - 2.0).abs() < 1e-12);
    }

    #[test]
    fn set_image_rejects_zero_dimensions() {
        let mut editor = EditorState::new();
        assert!(editor.set_image(ImageInfo::new(0, 10)).is_err());
        assert!(editor.image().is_none());
    }

    // -- Masking gate --

    #[test]
    fn toggle_is_rejected_outside_mask_mode() {
        let mut editor = editor_with_image();
        assert!(!editor.toggle_cell(0));
        assert!(editor.mask().is_empty());
    }

    #[test]
    fn toggle_is_rejected_out_of_domain() {
        let mut editor = editor_with_image();
        editor.set_mask_mode(true);
        let cells = editor.grid().cell_count();
        assert!(!editor.toggle_cell(cells));
        assert!(editor.toggle_cell(cells - 1));
    }

    // -- Cell state classification --

    #[test]
    fn cell_states_follow_mask_and_animation_flags() {
        let mut editor = editor_with_image();
        editor.set_mask_mode(true);
        editor.toggle_cell(4);

        assert_eq!(editor.cell_state(0), CellState::VisibleAnimating);
        assert_eq!(editor.cell_state(4), CellState::MaskedDim);

        editor.set_mask_mode(false);
        assert_eq!(editor.cell_state(4), CellState::MaskedHidden);

        editor.style_mut().animate = false;
        assert_eq!(editor.cell_state(0), CellState::VisibleStatic);
        // Masked cells ignore the animation flag.
        assert_eq!(editor.cell_state(4), CellState::MaskedHidden);
    }

    // -- Recipes --

    #[test]
    fn recipe_round_trip_preserves_state() {
        let mut editor = editor_with_image();
        editor.set_columns(10);
        editor.set_seed(7);
        editor.style_mut().animate = false;
        editor.set_mask_mode(true);
        editor.toggle_cell(2);
        editor.toggle_cell(5);

        let recipe = editor.recipe().unwrap();
        let mut restored = EditorState::from_recipe(recipe.clone()).unwrap();
        assert_eq!(restored.recipe().unwrap(), recipe);
        // The restored session generates the identical field.
        let a = editor.field().clone();
        assert_eq!(restored.field(), &a);
    }

    #[test]
    fn recipe_requires_an_image() {
        let editor = EditorState::new();
        assert!(editor.recipe().is_none());
    }

    #[test]
    fn from_recipe_rejects_invalid_recipe() {
        let mut recipe = Recipe::new(ImageInfo::new(100, 100));
        recipe.mask.insert(100_000);
        assert!(EditorState::from_recipe(recipe).is_err());
    }
}
