use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ninety-nine 运行配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NinetyNineConfig {
    /// 随机源配置
    #[serde(default)]
    pub random: RandomConfig,

    /// 乐透题目 (P24) 的参数
    pub lotto: LottoConfig,

    /// 组合题目 (P26) 的参数
    pub combinatorics: CombinatoricsConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 随机源配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomConfig {
    /// 随机种子，`None` 表示使用系统熵
    pub seed: Option<u64>,
}

/// 乐透配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LottoConfig {
    /// 抽取的数字个数
    #[serde(default = "default_lotto_numbers")]
    pub numbers: usize,

    /// 数字上限（包含）
    #[serde(default = "default_lotto_maximum")]
    pub maximum: i64,
}

/// 组合配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinatoricsConfig {
    /// 委员会人数
    #[serde(default = "default_committee_size")]
    pub committee_size: usize,

    /// 候选人数
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_lotto_numbers() -> usize {
    6
}

fn default_lotto_maximum() -> i64 {
    49
}

fn default_committee_size() -> usize {
    3
}

fn default_pool_size() -> usize {
    12
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for NinetyNineConfig {
    fn default() -> Self {
        Self {
            random: RandomConfig::default(),
            lotto: LottoConfig {
                numbers: default_lotto_numbers(),
                maximum: default_lotto_maximum(),
            },
            combinatorics: CombinatoricsConfig {
                committee_size: default_committee_size(),
                pool_size: default_pool_size(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl NinetyNineConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（NINETY_NINE__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use ninety_nine::config::NinetyNineConfig;
    ///
    /// // 加载配置（如果文件不存在，使用默认配置）
    /// let config = NinetyNineConfig::from_file("ninety-nine.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            // 1. 加载默认配置（内嵌）
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            // 2. 加载用户配置（可选，不存在不报错）
            .add_source(config::File::new(path, config::FileFormat::Toml).required(false))
            // 3. 加载环境变量（NINETY_NINE__ 前缀，双下划线分隔嵌套）
            .add_source(config::Environment::with_prefix("NINETY_NINE").separator("__"))
            .build()
            .map_err(|e| format!("Failed to load config: {}", e))?;

        Ok(settings
            .try_deserialize()
            .map_err(|e| format!("Failed to parse config: {}", e))?)
    }

    /// 保存配置到文件
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use ninety_nine::config::NinetyNineConfig;
    ///
    /// let config = NinetyNineConfig::default();
    /// config.save_to_file("ninety-nine.toml").unwrap();
    /// ```
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, toml_string)
            .map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }

    /// 验证配置
    ///
    /// 检查配置的合法性，包括：
    /// - 乐透参数
    /// - 组合参数
    /// - 日志级别与输出
    pub fn validate(&self) -> Result<(), String> {
        if self.lotto.maximum < 1 {
            return Err(format!(
                "Lotto maximum {} must be at least 1",
                self.lotto.maximum
            ));
        }
        let too_many = i64::try_from(self.lotto.numbers).map_or(true, |n| n > self.lotto.maximum);
        if too_many {
            return Err(format!(
                "Cannot draw {} distinct numbers from 1..={}",
                self.lotto.numbers, self.lotto.maximum
            ));
        }

        if self.combinatorics.committee_size > self.combinatorics.pool_size {
            return Err(format!(
                "Committee size {} exceeds pool size {}",
                self.combinatorics.committee_size, self.combinatorics.pool_size
            ));
        }

        // 验证日志级别
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ))
            }
        }

        // 验证日志输出
        match self.logging.output.as_str() {
            "stdout" => {}
            "file" if self.logging.log_file.is_none() => {
                return Err("Log output is 'file' but log_file path is not specified".to_string());
            }
            "file" => {}
            other => return Err(format!("Invalid log output: '{}'", other)),
        }

        Ok(())
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("📋 ninety-nine Configuration:");
        match self.random.seed {
            Some(seed) => println!("   Seed:        {}", seed),
            None => println!("   Seed:        (entropy)"),
        }
        println!(
            "   Lotto:       {} of 1..={}",
            self.lotto.numbers, self.lotto.maximum
        );
        println!(
            "   Committee:   {} of {}",
            self.combinatorics.committee_size, self.combinatorics.pool_size
        );
        println!("   Log Level:   {}", self.logging.level);
        println!("   Log Output:  {}", self.logging.output);
        if let Some(ref log_file) = self.logging.log_file {
            println!("   Log File:    {}", log_file.display());
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NinetyNineConfig::default();
        assert_eq!(config.random.seed, None);
        assert_eq!(config.lotto.numbers, 6);
        assert_eq!(config.lotto.maximum, 49);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_validation() {
        let mut config = NinetyNineConfig::default();

        // 有效配置
        assert!(config.validate().is_ok());

        // 乐透数字太多
        config.lotto.numbers = 50;
        assert!(config.validate().is_err());

        // 超出 i64 范围的数量不能绕过检查
        config.lotto.numbers = usize::MAX;
        assert!(config.validate().is_err());
        config.lotto.numbers = 6;

        // 委员会人数超过候选人数
        config.combinatorics.committee_size = 13;
        assert!(config.validate().is_err());
        config.combinatorics.committee_size = 3;

        // 无效日志级别
        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());
        config.logging.level = "debug".to_string();

        // 输出到文件但没有指定路径
        config.logging.output = "file".to_string();
        assert!(config.validate().is_err());
        config.logging.log_file = Some(PathBuf::from("./logs/ninety-nine.log"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let mut config = NinetyNineConfig::default();
        config.random.seed = Some(42);
        config.lotto.numbers = 5;

        let temp_file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        let path = temp_file.path().to_str().unwrap();

        // 保存
        config.save_to_file(path).unwrap();

        // 加载
        let loaded = NinetyNineConfig::from_file(path).unwrap();
        assert_eq!(loaded.random.seed, Some(42));
        assert_eq!(loaded.lotto.numbers, 5);
        assert_eq!(loaded.lotto.maximum, config.lotto.maximum);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let loaded = NinetyNineConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.lotto.numbers, 6);
        assert_eq!(loaded.combinatorics.pool_size, 12);
    }
}
