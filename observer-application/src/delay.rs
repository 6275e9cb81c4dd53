//! 延迟模拟（Delay）
//!
//! 用随机停顿模拟 I/O 延迟，仅用于演示；任何组件都不依赖停顿的具体时长。
//! 随机数生成器由 `RandomDelay` 持有，不使用进程级全局状态，
//! 测试中可以用固定种子或 `NoDelay` 获得确定性结果。
//!
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::trace;

pub const DEFAULT_MIN_MICROS: u64 = 600_000;
pub const DEFAULT_MAX_MICROS: u64 = 1_200_000;

/// 返回 `[min, max]` 闭区间内均匀分布的整数
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: u64, max: u64) -> AppResult<u64> {
    if min > max {
        return Err(AppError::InvalidDelayRange { min, max });
    }
    Ok(rng.gen_range(min..=max))
}

/// 延迟：处理器与演示阶段在执行后等待一次
#[async_trait]
pub trait Delay: Send + Sync {
    async fn pause(&self);
}

/// 基于随机数的延迟，单位微秒
#[derive(Debug)]
pub struct RandomDelay {
    rng: Mutex<StdRng>,
    min_micros: u64,
    max_micros: u64,
}

impl RandomDelay {
    pub fn new(rng: StdRng, min_micros: u64, max_micros: u64) -> AppResult<Self> {
        if min_micros > max_micros {
            return Err(AppError::InvalidDelayRange {
                min: min_micros,
                max: max_micros,
            });
        }
        Ok(Self {
            rng: Mutex::new(rng),
            min_micros,
            max_micros,
        })
    }

    /// 以当前时间为种子
    pub fn from_clock(min_micros: u64, max_micros: u64) -> AppResult<Self> {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed, min_micros, max_micros)
    }

    pub fn with_seed(seed: u64, min_micros: u64, max_micros: u64) -> AppResult<Self> {
        Self::new(StdRng::seed_from_u64(seed), min_micros, max_micros)
    }

    /// 抽取下一次停顿时长
    pub fn next_duration(&self) -> Duration {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        // 区间已在构造时校验
        let micros = rng.gen_range(self.min_micros..=self.max_micros);
        Duration::from_micros(micros)
    }
}

#[async_trait]
impl Delay for RandomDelay {
    async fn pause(&self) {
        let d = self.next_duration();
        trace!(micros = d.as_micros() as u64, "pause");
        tokio::time::sleep(d).await;
    }
}

/// 不停顿，测试用
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn pause(&self) {}
}
