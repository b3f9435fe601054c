/*
 * Copyright (c) Radzivon Bartoshyk, 3/2025. All rights reserved.
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
use crate::conv_support::{ConversionFlag, PixelLayout};
use crate::images::FrameImage;

/// Computes the expected destination pixel for an RGBX source frame.
///
/// Deliberately unoptimized nested indexing, kept independent from the row
/// based kernels so it can serve as their oracle. The first
/// `dst_layout.get_channels_count()` entries of the returned array are
/// meaningful.
pub fn expected_pixel(
    src: &FrameImage<u8>,
    x: u32,
    y: u32,
    flag: ConversionFlag,
    dst_layout: PixelLayout,
    alpha: Option<u8>,
) -> [u8; 4] {
    let (sx, sy) = flag.source_coordinate(x, y, src.width, src.height);
    let offset =
        sy as usize * src.stride as usize + sx as usize * PixelLayout::Rgbx.get_channels_count();
    let src_px = &src.data[offset..offset + PixelLayout::Rgbx.get_channels_count()];

    let mut out = [0u8; 4];
    out[dst_layout.get_r_channel_offset()] = src_px[0];
    out[dst_layout.get_g_channel_offset()] = src_px[1];
    out[dst_layout.get_b_channel_offset()] = src_px[2];
    if dst_layout.has_alpha() {
        out[dst_layout.get_a_channel_offset()] = match alpha {
            Some(value) => value,
            None => src_px[3],
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(data: &[u8], stride: u32, width: u32, height: u32) -> FrameImage<'_, u8> {
        FrameImage {
            data,
            stride,
            width,
            height,
        }
    }

    #[test]
    fn identity_keeps_channel_values() {
        let data = [10, 20, 30, 40, 50, 60, 70, 80];
        let src = frame(&data, 8, 2, 1);
        assert_eq!(
            expected_pixel(&src, 0, 0, ConversionFlag::Normal, PixelLayout::Rgb, None)[0..3],
            [10, 20, 30]
        );
        assert_eq!(
            expected_pixel(&src, 1, 0, ConversionFlag::Normal, PixelLayout::Rgba, None),
            [50, 60, 70, 80]
        );
    }

    #[test]
    fn constant_alpha_overrides_source() {
        let data = [10, 20, 30, 40];
        let src = frame(&data, 4, 1, 1);
        assert_eq!(
            expected_pixel(
                &src,
                0,
                0,
                ConversionFlag::Normal,
                PixelLayout::Rgba,
                Some(255)
            ),
            [10, 20, 30, 255]
        );
    }

    #[test]
    fn geometric_flags_read_mapped_coordinates() {
        // 2x2 frame with per-pixel markers, stride includes 4 padding bytes
        let mut data = vec![0u8; 12 * 2];
        for y in 0..2usize {
            for x in 0..2usize {
                let px = (y * 2 + x) as u8 * 10;
                data[y * 12 + x * 4..y * 12 + x * 4 + 4]
                    .copy_from_slice(&[px, px + 1, px + 2, px + 3]);
            }
        }
        let src = frame(&data, 12, 2, 2);
        assert_eq!(
            expected_pixel(&src, 1, 1, ConversionFlag::FlippedMirrored, PixelLayout::Rgb, None)
                [0..3],
            [0, 1, 2]
        );
        assert_eq!(
            expected_pixel(&src, 0, 1, ConversionFlag::Flipped, PixelLayout::Rgb, None)[0..3],
            [0, 1, 2]
        );
        assert_eq!(
            expected_pixel(&src, 1, 0, ConversionFlag::Mirrored, PixelLayout::Rgb, None)[0..3],
            [0, 1, 2]
        );
    }
}
