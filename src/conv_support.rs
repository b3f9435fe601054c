/*
 * Copyright (c) Radzivon Bartoshyk, 2/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

/// Declares interleaved pixel layouts handled by the harness.
///
/// `Rgbx` is the 32-bit source format: red, green, blue and one trailing
/// channel whose content is undefined padding.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    Rgbx = 0,
    Rgb = 1,
    Rgba = 2,
}

impl From<u8> for PixelLayout {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => PixelLayout::Rgbx,
            1 => PixelLayout::Rgb,
            2 => PixelLayout::Rgba,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl PixelLayout {
    #[inline(always)]
    pub const fn get_channels_count(&self) -> usize {
        match self {
            PixelLayout::Rgbx | PixelLayout::Rgba => 4,
            PixelLayout::Rgb => 3,
        }
    }

    #[inline(always)]
    pub const fn has_alpha(&self) -> bool {
        match self {
            PixelLayout::Rgba => true,
            PixelLayout::Rgbx | PixelLayout::Rgb => false,
        }
    }

    #[inline(always)]
    pub const fn get_r_channel_offset(&self) -> usize {
        0
    }

    #[inline(always)]
    pub const fn get_g_channel_offset(&self) -> usize {
        1
    }

    #[inline(always)]
    pub const fn get_b_channel_offset(&self) -> usize {
        2
    }

    #[inline(always)]
    pub const fn get_a_channel_offset(&self) -> usize {
        match self {
            PixelLayout::Rgba => 3,
            PixelLayout::Rgbx | PixelLayout::Rgb => 0,
        }
    }
}

/// Geometric transform applied while converting between pixel layouts.
///
/// Every conversion kernel and the reference transform resolve destination
/// coordinates through [ConversionFlag::source_coordinate], so geometric and
/// channel transforms stay verifiable independently and jointly.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConversionFlag {
    /// Plain conversion, destination pixel (x, y) reads source pixel (x, y).
    Normal,
    /// Vertical mirror, rows are exchanged top to bottom.
    Flipped,
    /// Horizontal mirror, pixels are exchanged within each row.
    Mirrored,
    /// Both mirrors combined, equivalent to a 180 degree rotation.
    FlippedMirrored,
}

impl ConversionFlag {
    pub const ALL: [ConversionFlag; 4] = [
        ConversionFlag::Normal,
        ConversionFlag::Flipped,
        ConversionFlag::Mirrored,
        ConversionFlag::FlippedMirrored,
    ];

    /// Maps a destination coordinate to the source coordinate it reads from.
    #[inline(always)]
    pub const fn source_coordinate(&self, x: u32, y: u32, width: u32, height: u32) -> (u32, u32) {
        match self {
            ConversionFlag::Normal => (x, y),
            ConversionFlag::Flipped => (x, height - 1 - y),
            ConversionFlag::Mirrored => (width - 1 - x, y),
            ConversionFlag::FlippedMirrored => (width - 1 - x, height - 1 - y),
        }
    }
}
