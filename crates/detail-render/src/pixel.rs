//! 8-bit RGB pixel value.

/// One RGB pixel with 8-bit channels.
///
/// Channel depth is fixed at 8 bits: every annotation is a three-digit
/// decimal, so values above 255 are unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel(pub [u8; 3]);

impl Pixel {
    /// Pure black `(0, 0, 0)`.
    pub const BLACK: Self = Self([0, 0, 0]);
    /// Pure white `(255, 255, 255)`.
    pub const WHITE: Self = Self([255, 255, 255]);

    /// Build a pixel from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Uniform grey with all channels set to `v`.
    #[inline]
    pub const fn grey(v: u8) -> Self {
        Self([v, v, v])
    }

    /// Channels in R, G, B order.
    #[inline]
    pub fn channels(&self) -> [u8; 3] {
        self.0
    }

    /// True when R = G = B.
    #[inline]
    pub fn is_grey(&self) -> bool {
        let [r, g, b] = self.0;
        r == g && g == b
    }

    /// Floor of the channel mean.
    #[inline]
    pub fn average(&self) -> u8 {
        let [r, g, b] = self.0;
        ((r as u16 + g as u16 + b as u16) / 3) as u8
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(channels: [u8; 3]) -> Self {
        Self(channels)
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self([r, g, b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_floors() {
        assert_eq!(Pixel::new(10, 20, 30).average(), 20);
        assert_eq!(Pixel::new(1, 1, 2).average(), 1);
        assert_eq!(Pixel::WHITE.average(), 255);
        assert_eq!(Pixel::new(127, 128, 128).average(), 127);
    }

    #[test]
    fn test_is_grey() {
        assert!(Pixel::grey(100).is_grey());
        assert!(Pixel::BLACK.is_grey());
        assert!(!Pixel::new(100, 100, 101).is_grey());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Pixel::from([1, 2, 3]), Pixel::new(1, 2, 3));
        assert_eq!(Pixel::from((4, 5, 6)).channels(), [4, 5, 6]);
    }
}
