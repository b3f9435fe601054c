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

#![no_main]

use libfuzzer_sys::fuzz_target;
use rgbx_verify::{
    rgbx_to_rgb, verify_conversion, verify_padding, ConversionFlag, FrameImage, PixelLayout,
    PADDING_SENTINEL,
};

fuzz_target!(|data: (u8, u8, u8, u8)| {
    fuzz_rgbx_to_rgb(data.0, data.1, data.2, data.3);
});

fn fill_source(width: u32, height: u32, stride: u32) -> Vec<u8> {
    let mut src = vec![PADDING_SENTINEL; stride as usize * height as usize];
    for (y, row) in src.chunks_exact_mut(stride as usize).enumerate() {
        for (x, px) in row[..width as usize * 4].chunks_exact_mut(4).enumerate() {
            for (c, value) in px.iter_mut().enumerate() {
                *value = (x as u8)
                    .wrapping_mul(31)
                    .wrapping_add((y as u8).wrapping_mul(17))
                    .wrapping_add(c as u8 * 77);
            }
        }
    }
    src
}

fn fuzz_rgbx_to_rgb(i_width: u8, i_height: u8, src_padding: u8, dst_padding: u8) {
    if i_width == 0 || i_height == 0 {
        return;
    }
    let width = i_width as u32;
    let height = i_height as u32;
    let src_stride = width * 4 + src_padding as u32;
    let src_data = fill_source(width, height, src_stride);
    let src = FrameImage {
        data: &src_data,
        stride: src_stride,
        width,
        height,
    };

    let dst_stride = width * 3 + dst_padding as u32;
    for flag in ConversionFlag::ALL {
        let mut dst_data = vec![PADDING_SENTINEL; dst_stride as usize * height as usize];
        rgbx_to_rgb(
            &src_data, src_stride, &mut dst_data, dst_stride, width, height, flag, None,
        )
        .unwrap();
        let dst = FrameImage {
            data: &dst_data,
            stride: dst_stride,
            width,
            height,
        };
        if let Some(mismatch) = verify_conversion(&src, &dst, PixelLayout::Rgb, flag, None) {
            panic!("{:?}: {}", flag, mismatch);
        }
        if let Some((y, offset)) = verify_padding(&dst, PixelLayout::Rgb, PADDING_SENTINEL) {
            panic!("{:?}: padding overwritten at row {}, byte {}", flag, y, offset);
        }
    }
}
