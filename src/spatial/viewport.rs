//! Viewport geometry and render classification
//!
//! Growth runs slightly past the viewport so border tiles complete; the
//! overlay band is the farthest a still-attachable tile corner can lie from
//! a vertex (`scale · sin 36° · 2`). Vertices are classified once against
//! the band, tiles fold their corners' classifications into a render signal.

/// Render classification of a vertex relative to the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Strictly inside the viewport; attached tiles always render
    DefiniteRender,
    /// Outside the overlay band; attached tiles never render
    DefiniteSkip,
    /// In the band, within the corner radius; render unless overruled
    WeakRender,
    /// In the band, outside the corner radius; skip unless overruled
    WeakSkip,
}

impl Visibility {
    /// Whether vertices with this classification feed the free-choice pool
    pub const fn in_view(self) -> bool {
        matches!(self, Self::DefiniteRender | Self::WeakRender)
    }

    /// Whether this classification is final for a tile's render signal
    pub const fn is_definite(self) -> bool {
        matches!(self, Self::DefiniteRender | Self::DefiniteSkip)
    }
}

/// The target rectangle plus its growth overlay band
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    width: f64,
    height: f64,
    overlay: f64,
}

impl Viewport {
    /// Build a viewport for a tile scale in pixels
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            width,
            height,
            overlay: scale * crate::math::angles::to_radians(36.0).sin() * 2.0,
        }
    }

    /// Viewport width in pixels
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height in pixels
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Width of the overlay band in pixels
    pub const fn overlay(&self) -> f64 {
        self.overlay
    }

    /// Classify a point against viewport, overlay band and corner radius
    pub fn classify(&self, point: [f64; 2]) -> Visibility {
        let [x, y] = point;

        let in_band = x > -self.overlay
            && x < self.width + self.overlay
            && y > -self.overlay
            && y < self.height + self.overlay;
        if !in_band {
            return Visibility::DefiniteSkip;
        }

        if x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height {
            return Visibility::DefiniteRender;
        }

        // Fold each coordinate toward its nearer viewport edge; the folded
        // pair is the offset from the nearest corner region.
        let folded_x = fold(x, self.width);
        let folded_y = fold(y, self.height);
        if folded_x.hypot(folded_y) < self.overlay {
            Visibility::WeakRender
        } else {
            Visibility::WeakSkip
        }
    }
}

fn fold(value: f64, extent: f64) -> f64 {
    extent / 2.0 - (extent / 2.0 - value.abs()).abs()
}

/// Running render decision for one tile, folded corner by corner
///
/// A definite state, once reached, is final. From weak-render any corner's
/// classification takes over; from weak-skip only a definite one does.
#[derive(Clone, Copy, Debug)]
pub struct RenderSignal {
    state: Visibility,
}

impl Default for RenderSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSignal {
    /// Start in the weak-render state
    pub const fn new() -> Self {
        Self {
            state: Visibility::WeakRender,
        }
    }

    /// Fold the next corner's classification into the signal
    pub const fn observe(&mut self, visibility: Visibility) {
        match self.state {
            Visibility::DefiniteRender | Visibility::DefiniteSkip => {}
            Visibility::WeakRender => self.state = visibility,
            Visibility::WeakSkip => {
                if visibility.is_definite() {
                    self.state = visibility;
                }
            }
        }
    }

    /// Whether the tile joins the visible output set
    ///
    /// Weak-skip still renders: a tile reaching that far into the band was
    /// attached to at least one in-view vertex. Only definite-skip excludes.
    pub const fn allows_render(&self) -> bool {
        !matches!(self.state, Visibility::DefiniteSkip)
    }
}
