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
use criterion::{criterion_group, criterion_main, Criterion};
use rgbx_verify::{rgbx_to_rgb, rgbx_to_rgba, ConversionFlag, FrameGenerator, PixelLayout};

pub fn criterion_benchmark(c: &mut Criterion) {
    let width = 1920u32;
    let height = 1080u32;

    let mut generator = FrameGenerator::from_seed(0xBEEF);
    let src = generator.random_frame(width, height, PixelLayout::Rgbx);
    let src = src.to_fixed();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .unwrap();

    c.bench_function("rgbx_to_rgb 1080p serial", |b| {
        let mut dst = vec![0u8; width as usize * 3 * height as usize];
        b.iter(|| {
            rgbx_to_rgb(
                src.data,
                src.stride,
                &mut dst,
                width * 3,
                width,
                height,
                ConversionFlag::Normal,
                None,
            )
            .unwrap();
        })
    });

    c.bench_function("rgbx_to_rgb 1080p pooled", |b| {
        let mut dst = vec![0u8; width as usize * 3 * height as usize];
        b.iter(|| {
            rgbx_to_rgb(
                src.data,
                src.stride,
                &mut dst,
                width * 3,
                width,
                height,
                ConversionFlag::Normal,
                Some(&pool),
            )
            .unwrap();
        })
    });

    c.bench_function("rgbx_to_rgba 1080p mirrored serial", |b| {
        let mut dst = vec![0u8; width as usize * 4 * height as usize];
        b.iter(|| {
            rgbx_to_rgba(
                src.data,
                src.stride,
                &mut dst,
                width * 4,
                width,
                height,
                ConversionFlag::Mirrored,
                None,
                None,
            )
            .unwrap();
        })
    });

    c.bench_function("rgbx_to_rgba 1080p mirrored pooled", |b| {
        let mut dst = vec![0u8; width as usize * 4 * height as usize];
        b.iter(|| {
            rgbx_to_rgba(
                src.data,
                src.stride,
                &mut dst,
                width * 4,
                width,
                height,
                ConversionFlag::Mirrored,
                None,
                Some(&pool),
            )
            .unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
