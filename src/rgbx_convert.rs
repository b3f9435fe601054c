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
#![forbid(unsafe_code)]
use crate::conv_error::check_frame_destination;
use crate::conv_support::{ConversionFlag, PixelLayout};
use crate::ConvError;
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::prelude::ParallelSliceMut;
use rayon::ThreadPool;

const SRC_CHANNELS: usize = 4;

#[inline(always)]
fn store_pixel(dst_px: &mut [u8], src_px: &[u8], dst_layout: PixelLayout, alpha: Option<u8>) {
    dst_px[dst_layout.get_r_channel_offset()] = src_px[0];
    dst_px[dst_layout.get_g_channel_offset()] = src_px[1];
    dst_px[dst_layout.get_b_channel_offset()] = src_px[2];
    if dst_layout.has_alpha() {
        dst_px[dst_layout.get_a_channel_offset()] = match alpha {
            Some(value) => value,
            None => src_px[3],
        };
    }
}

#[inline(always)]
fn convert_row<const DST: u8>(
    src: &[u8],
    src_stride: u32,
    dst_row: &mut [u8],
    y: usize,
    width: u32,
    height: u32,
    flag: ConversionFlag,
    alpha: Option<u8>,
) {
    let dst_layout: PixelLayout = DST.into();
    let dst_channels = dst_layout.get_channels_count();
    let sy = match flag {
        ConversionFlag::Flipped | ConversionFlag::FlippedMirrored => height as usize - 1 - y,
        ConversionFlag::Normal | ConversionFlag::Mirrored => y,
    };
    let src_row = &src[sy * src_stride as usize..][..width as usize * SRC_CHANNELS];
    let dst_row = &mut dst_row[..width as usize * dst_channels];

    match flag {
        ConversionFlag::Mirrored | ConversionFlag::FlippedMirrored => {
            for (dst_px, src_px) in dst_row
                .chunks_exact_mut(dst_channels)
                .zip(src_row.chunks_exact(SRC_CHANNELS).rev())
            {
                store_pixel(dst_px, src_px, dst_layout, alpha);
            }
        }
        ConversionFlag::Normal | ConversionFlag::Flipped => {
            for (dst_px, src_px) in dst_row
                .chunks_exact_mut(dst_channels)
                .zip(src_row.chunks_exact(SRC_CHANNELS))
            {
                store_pixel(dst_px, src_px, dst_layout, alpha);
            }
        }
    }
}

/// RGBX conversion implementation
///
/// Rows are independent, so when a pool is supplied they are distributed
/// across its workers; results are identical to the serial path.
fn rgbx_convert_impl<const DST: u8>(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    flag: ConversionFlag,
    alpha: Option<u8>,
    pool: Option<&ThreadPool>,
) -> Result<(), ConvError> {
    let dst_layout: PixelLayout = DST.into();
    check_frame_destination(src, src_stride, width, height, SRC_CHANNELS)?;
    check_frame_destination(
        dst,
        dst_stride,
        width,
        height,
        dst_layout.get_channels_count(),
    )?;

    match pool {
        Some(pool) => pool.install(|| {
            dst.par_chunks_exact_mut(dst_stride as usize)
                .enumerate()
                .for_each(|(y, dst_row)| {
                    convert_row::<DST>(src, src_stride, dst_row, y, width, height, flag, alpha)
                })
        }),
        None => dst
            .chunks_exact_mut(dst_stride as usize)
            .enumerate()
            .for_each(|(y, dst_row)| {
                convert_row::<DST>(src, src_stride, dst_row, y, width, height, flag, alpha)
            }),
    }

    Ok(())
}

/// Converts RGBX (32 bit-per-pixel RGB) to RGB (24 bit-per-pixel)
///
/// The undefined fourth source channel is dropped.
///
/// # Arguments
///
/// * `src`: Source slice
/// * `src_stride`: Source slice stride
/// * `dst`: Destination slice
/// * `dst_stride`: Destination slice stride
/// * `width`: Image width
/// * `height`: Image height
/// * `flag`: Geometric transform applied during conversion
/// * `pool`: Optional thread pool the kernel may distribute rows across
///
/// returns: Result<(), ConvError>
///
pub fn rgbx_to_rgb(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    flag: ConversionFlag,
    pool: Option<&ThreadPool>,
) -> Result<(), ConvError> {
    rgbx_convert_impl::<{ PixelLayout::Rgb as u8 }>(
        src, src_stride, dst, dst_stride, width, height, flag, None, pool,
    )
}

/// Converts RGBX (32 bit-per-pixel RGB) to RGBA (32 bit-per-pixel with alpha)
///
/// With `alpha` set to `None` the fourth source channel passes through
/// unchanged; with `Some(value)` every destination alpha is set to `value`.
///
/// # Arguments
///
/// * `src`: Source slice
/// * `src_stride`: Source slice stride
/// * `dst`: Destination slice
/// * `dst_stride`: Destination slice stride
/// * `width`: Image width
/// * `height`: Image height
/// * `flag`: Geometric transform applied during conversion
/// * `alpha`: Alpha fill policy
/// * `pool`: Optional thread pool the kernel may distribute rows across
///
/// returns: Result<(), ConvError>
///
pub fn rgbx_to_rgba(
    src: &[u8],
    src_stride: u32,
    dst: &mut [u8],
    dst_stride: u32,
    width: u32,
    height: u32,
    flag: ConversionFlag,
    alpha: Option<u8>,
    pool: Option<&ThreadPool>,
) -> Result<(), ConvError> {
    rgbx_convert_impl::<{ PixelLayout::Rgba as u8 }>(
        src, src_stride, dst, dst_stride, width, height, flag, alpha, pool,
    )
}
