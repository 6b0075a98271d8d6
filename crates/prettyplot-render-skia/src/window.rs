// File: crates/prettyplot-render-skia/src/window.rs
// Summary: Blocking figure window: rasterize once, blit RGBA into a softbuffer surface until closed.

use std::num::NonZeroU32;

use prettyplot_core::{PlotError, PlotResult};
use tracing::{debug, warn};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

use crate::export;
use crate::scene::Scene;

fn render_err(what: &str, e: impl std::fmt::Display) -> PlotError {
    PlotError::Render(format!("{what}: {e}"))
}

/// Open a window showing `scene` and return once the user closes it.
pub fn show(scene: &Scene, title: &str) -> PlotResult<()> {
    let (rgba, w, h, _) = export::rgba8(scene)?;
    // softbuffer wants 0RGB words.
    let pixels: Vec<u32> = rgba
        .chunks_exact(4)
        .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32)
        .collect();

    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(winit::dpi::PhysicalSize::new(w, h))
        .build(&event_loop)
        .map_err(|e| render_err("build window", e))?;
    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| render_err("softbuffer context", e))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| render_err("softbuffer surface", e))?;
    debug!(width = w, height = h, "figure window opened");

    let mut failure = None;
    event_loop.run_return(|event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => *cf = ControlFlow::Exit,
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                if let Err(e) = blit(&mut surface, &pixels, (w, h), (size.width, size.height)) {
                    warn!(error = %e, "figure window redraw failed");
                    failure = Some(e);
                    *cf = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
    failure.map_or(Ok(()), Err)
}

/// Copy the figure into the window buffer; uncovered window area is white.
fn blit(
    surface: &mut softbuffer::Surface,
    pixels: &[u32],
    (fw, fh): (u32, u32),
    (ww, wh): (u32, u32),
) -> PlotResult<()> {
    let (Some(nw), Some(nh)) = (NonZeroU32::new(ww), NonZeroU32::new(wh)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| render_err("resize surface", e))?;
    let mut frame = surface.buffer_mut().map_err(|e| render_err("surface buffer", e))?;
    frame.fill(0x00ff_ffff);
    let (cols, rows) = (fw.min(ww) as usize, fh.min(wh) as usize);
    for row in 0..rows {
        let src = &pixels[row * fw as usize..row * fw as usize + cols];
        let dst = row * ww as usize;
        frame[dst..dst + cols].copy_from_slice(src);
    }
    frame.present().map_err(|e| render_err("present frame", e))
}
