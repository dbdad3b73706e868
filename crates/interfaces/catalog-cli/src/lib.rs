pub mod commands;
pub mod render;

use catalog_core::EllipsisPolicy;
use clap::ValueEnum;

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum CliEllipsis {
    #[default]
    Always,
    WhenTruncated,
}

impl From<CliEllipsis> for EllipsisPolicy {
    fn from(e: CliEllipsis) -> Self {
        match e {
            CliEllipsis::Always => EllipsisPolicy::Always,
            CliEllipsis::WhenTruncated => EllipsisPolicy::WhenTruncated,
        }
    }
}
