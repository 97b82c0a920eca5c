use pangoffi_sys::PangoRectangle;

/// An axis-aligned rectangle in Pango units or pixels, depending on the
/// call it came from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Ink and logical rectangles, in that order.
pub type Extents = (Rectangle, Rectangle);

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<PangoRectangle> for Rectangle {
    fn from(rect: PangoRectangle) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

impl From<Rectangle> for PangoRectangle {
    fn from(rect: Rectangle) -> Self {
        PangoRectangle {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Calls `fill` with two zeroed native rectangles and converts the result.
pub(crate) fn extents_with<E>(
    fill: impl FnOnce(*mut PangoRectangle, *mut PangoRectangle) -> Result<(), E>,
) -> Result<Extents, E> {
    let mut ink = PangoRectangle::default();
    let mut logical = PangoRectangle::default();
    fill(&mut ink, &mut logical)?;
    Ok((ink.into(), logical.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_conversion_keeps_fields() {
        let native = PangoRectangle {
            x: 1,
            y: -2,
            width: 30,
            height: 40,
        };
        let rect = Rectangle::from(native);
        assert_eq!(rect, Rectangle::new(1, -2, 30, 40));
        assert_eq!(PangoRectangle::from(rect), native);
    }

    #[test]
    fn default_is_empty() {
        assert!(Rectangle::default().is_empty());
        assert!(!Rectangle::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn extents_are_ink_then_logical() {
        let (ink, logical) = extents_with::<()>(|ink, logical| {
            unsafe {
                (*ink).width = 5;
                (*logical).height = 9;
            }
            Ok(())
        })
        .unwrap();
        assert_eq!(ink.width, 5);
        assert_eq!(logical.height, 9);
    }
}
