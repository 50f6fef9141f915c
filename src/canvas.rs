use backdrop_core::surface::{CompositeMode, Paint, Surface, SurfaceError};
use backdrop_core::Hsla;
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] over a canvas element and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

fn js_err(op: &'static str) -> impl FnOnce(JsValue) -> SurfaceError {
    move |e| SurfaceError::call(op, format!("{:?}", e))
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| SurfaceError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| SurfaceError::Unavailable("2d context not supported".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Unavailable("unexpected context type".into()))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    #[allow(deprecated)]
    fn set_fill(&self, paint: &Paint) -> Result<(), SurfaceError> {
        match paint {
            Paint::Solid(color) => {
                self.ctx.set_fill_style(&JsValue::from_str(&color.to_string()));
            }
            Paint::Radial {
                center,
                inner,
                outer,
                stops,
            } => {
                let g = self
                    .ctx
                    .create_radial_gradient(center.x, center.y, *inner, center.x, center.y, *outer)
                    .map_err(js_err("createRadialGradient"))?;
                for stop in stops {
                    g.add_color_stop(stop.offset as f32, &stop.color.to_string())
                        .map_err(js_err("addColorStop"))?;
                }
                self.ctx.set_fill_style(&g);
            }
        }
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn set_backing_size(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok(())
    }

    fn set_display_size(&mut self, width: f64, height: f64) -> Result<(), SurfaceError> {
        let style = self.canvas.style();
        style
            .set_property("width", &format!("{}px", width))
            .map_err(js_err("style.width"))?;
        style
            .set_property("height", &format!("{}px", height))
            .map_err(js_err("style.height"))
    }

    fn set_scale(&mut self, scale: f64) -> Result<(), SurfaceError> {
        self.ctx
            .set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)
            .map_err(js_err("setTransform"))
    }

    fn set_composite(&mut self, mode: CompositeMode) -> Result<(), SurfaceError> {
        self.ctx
            .set_global_composite_operation(mode.as_str())
            .map_err(js_err("globalCompositeOperation"))
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, paint: &Paint) -> Result<(), SurfaceError> {
        self.set_fill(paint)?;
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
        Ok(())
    }

    fn fill_disc(&mut self, center: DVec2, radius: f64, paint: &Paint) -> Result<(), SurfaceError> {
        self.set_fill(paint)?;
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius, 0.0, TAU)
            .map_err(js_err("arc"))?;
        self.ctx.fill();
        Ok(())
    }

    #[allow(deprecated)]
    fn stroke_segment(
        &mut self,
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Hsla,
    ) -> Result<(), SurfaceError> {
        self.ctx.set_stroke_style(&JsValue::from_str(&color.to_string()));
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        Ok(())
    }
}
