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
use crate::images::{FrameImage, FrameImageMut};
use crate::rgbx_convert::{rgbx_to_rgb, rgbx_to_rgba};
use crate::ConvError;
use rayon::ThreadPool;

/// Black-box interface of a conversion kernel under test.
///
/// Production kernels and deliberately broken test doubles implement this
/// alike; the harness only sees the destination layout, the alpha policy and
/// a synchronous convert call.
pub trait FrameKernel: Sync {
    fn dst_layout(&self) -> PixelLayout;

    /// Alpha policy the kernel applies, `None` meaning the fourth source
    /// channel passes through. The verifier mirrors this in its oracle.
    fn alpha_fill(&self) -> Option<u8> {
        None
    }

    /// Converts `src` into `dst`, blocking until every row, including any
    /// distributed to pool workers, is complete.
    fn convert(
        &self,
        src: &FrameImage<u8>,
        dst: &mut FrameImageMut<u8>,
        flag: ConversionFlag,
        pool: Option<&ThreadPool>,
    ) -> Result<(), ConvError>;
}

/// RGBX to RGB production kernel.
pub struct RgbxToRgbKernel;

impl FrameKernel for RgbxToRgbKernel {
    fn dst_layout(&self) -> PixelLayout {
        PixelLayout::Rgb
    }

    fn convert(
        &self,
        src: &FrameImage<u8>,
        dst: &mut FrameImageMut<u8>,
        flag: ConversionFlag,
        pool: Option<&ThreadPool>,
    ) -> Result<(), ConvError> {
        let dst_stride = dst.stride;
        rgbx_to_rgb(
            src.data,
            src.stride,
            dst.data.as_mut(),
            dst_stride,
            src.width,
            src.height,
            flag,
            pool,
        )
    }
}

/// RGBX to RGBA production kernel, with configurable alpha policy.
pub struct RgbxToRgbaKernel {
    pub alpha: Option<u8>,
}

impl Default for RgbxToRgbaKernel {
    fn default() -> Self {
        RgbxToRgbaKernel { alpha: None }
    }
}

impl FrameKernel for RgbxToRgbaKernel {
    fn dst_layout(&self) -> PixelLayout {
        PixelLayout::Rgba
    }

    fn alpha_fill(&self) -> Option<u8> {
        self.alpha
    }

    fn convert(
        &self,
        src: &FrameImage<u8>,
        dst: &mut FrameImageMut<u8>,
        flag: ConversionFlag,
        pool: Option<&ThreadPool>,
    ) -> Result<(), ConvError> {
        let dst_stride = dst.stride;
        rgbx_to_rgba(
            src.data,
            src.stride,
            dst.data.as_mut(),
            dst_stride,
            src.width,
            src.height,
            flag,
            self.alpha,
            pool,
        )
    }
}

/// Declares how a conversion job is executed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// No worker capability is supplied, all rows run on the calling thread.
    Serial,
    /// The shared thread pool is supplied and the kernel may partition rows.
    Pooled,
}

impl ExecutionMode {
    pub const ALL: [ExecutionMode; 2] = [ExecutionMode::Serial, ExecutionMode::Pooled];
}

/// Supplies or withholds the worker capability per job; the partitioning
/// strategy itself belongs to the kernel.
pub struct ConversionInvoker<'a> {
    pool: &'a ThreadPool,
}

impl<'a> ConversionInvoker<'a> {
    pub fn new(pool: &'a ThreadPool) -> Self {
        ConversionInvoker { pool }
    }

    pub fn invoke(
        &self,
        kernel: &dyn FrameKernel,
        src: &FrameImage<u8>,
        dst: &mut FrameImageMut<u8>,
        flag: ConversionFlag,
        mode: ExecutionMode,
    ) -> Result<(), ConvError> {
        let pool = match mode {
            ExecutionMode::Serial => None,
            ExecutionMode::Pooled => Some(self.pool),
        };
        kernel.convert(src, dst, flag, pool)
    }
}
