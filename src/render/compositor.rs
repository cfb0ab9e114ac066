//! Three-phase deterministic render of a base image plus the active operation prefix.
//!
//! 1. geometry and tonal filter
//! 2. pixel-buffer operations, in a fixed order
//! 3. composite effects (grain, then vignette)
//!
//! Grain noise is the one nondeterministic element: with [`GrainSeed::Random`] each render
//! draws a fresh field. Pass [`GrainSeed::Fixed`] for byte-identical output.

use crate::{
    color::curve::{apply_curve_lut, build_curve_lut},
    compile::state::{RenderState, compute_render_state},
    effects::{
        color::{
            apply_highlight_shadow, apply_hsl, apply_split_toning, apply_temperature,
            apply_tint, apply_vibrance,
        },
        composite::{apply_grain, apply_vignette},
        detail::{apply_clarity, apply_sharpen},
        mask::{apply_gradient_mask, apply_radial_mask},
    },
    foundation::config::RenderOpts,
    foundation::error::RetouchResult,
    model::operation::Operation,
    render::{geometry::draw_geometry, surface::Surface, tonal::apply_tonal},
};

/// The prefix `[0, cursor]` of `ops`; empty when `cursor < 0`.
pub fn active_prefix(ops: &[Operation], cursor: isize) -> &[Operation] {
    if cursor < 0 {
        return &[];
    }
    let end = (cursor as usize).saturating_add(1).min(ops.len());
    &ops[..end]
}

/// Render into a caller-owned surface, resizing it to the destination size.
#[tracing::instrument(skip(out, base, ops, opts), fields(ops = ops.len()))]
pub fn render_into(
    out: &mut Surface,
    base: &Surface,
    ops: &[Operation],
    cursor: isize,
    opts: &RenderOpts,
) -> RetouchResult<()> {
    let state = compute_render_state(base.size(), active_prefix(ops, cursor));
    render_state_into(out, base, &state, opts)
}

/// Render to a new surface.
pub fn render(
    base: &Surface,
    ops: &[Operation],
    cursor: isize,
    opts: &RenderOpts,
) -> RetouchResult<Surface> {
    let mut out = Surface::new(base.size())?;
    render_into(&mut out, base, ops, cursor, opts)?;
    Ok(out)
}

/// Unmodified copy of the base, for before/after comparison.
pub fn render_original(base: &Surface) -> Surface {
    base.clone()
}

pub fn render_state_into(
    out: &mut Surface,
    base: &Surface,
    state: &RenderState,
    opts: &RenderOpts,
) -> RetouchResult<()> {
    let dest = state.dest_size();
    out.reset(dest)?;
    if dest.is_empty() {
        return Ok(());
    }

    draw_geometry(out, base, state)?;
    apply_tonal(out, &state.tonal)?;
    out.clear_transparent();

    if state.needs_pixel_ops() {
        tracing::trace!("entering pixel phase");
        apply_pixel_ops(out, state)?;
        out.clear_transparent();
    }

    if state.grain > 0.0 {
        apply_grain(&mut out.data, dest, state.grain, opts.grain.resolve())?;
    }
    if state.vignette.amount > 0.0 {
        apply_vignette(
            &mut out.data,
            dest,
            state.vignette.amount,
            state.vignette.feather,
        )?;
    }
    Ok(())
}

fn apply_pixel_ops(out: &mut Surface, st: &RenderState) -> RetouchResult<()> {
    let size = out.size();
    let d = &mut out.data;

    if st.temperature != 0.0 {
        apply_temperature(d, st.temperature);
    }
    if st.tint != 0.0 {
        apply_tint(d, st.tint);
    }
    for h in st.hsl.iter().filter(|h| !h.is_neutral()) {
        apply_hsl(d, h.channel, h.hue, h.sat, h.light);
    }
    apply_highlight_shadow(d, st.highlights, st.shadows);
    for c in st.curves.iter().filter(|c| c.points.len() >= 2) {
        apply_curve_lut(d, c.channel, &build_curve_lut(&c.points));
    }
    apply_vibrance(d, st.vibrance);
    if let Some(split) = &st.split_toning {
        apply_split_toning(d, split);
    }
    apply_clarity(d, size, st.clarity)?;
    apply_sharpen(d, size, st.sharpen.amount, st.sharpen.radius)?;
    for m in &st.radial_masks {
        apply_radial_mask(d, size, m)?;
    }
    for m in &st.gradient_masks {
        apply_gradient_mask(d, size, m)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
