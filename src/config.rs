// src/config.rs
use crate::args::{ProjectArgs, ScanArgs};
use crate::options;
pub use srcbundle_engine::config::{
    ProjectConfig, ProjectConfigBuilder, ProjectConfigBuilderError, ScanConfig,
    ScanConfigBuilder, ScanConfigBuilderError,
};
use srcbundle_engine::options as engine_options;

impl TryFrom<ScanArgs> for ScanConfig {
    type Error = ScanConfigBuilderError;

    fn try_from(args: ScanArgs) -> Result<Self, Self::Error> {
        ScanConfigBuilder::default()
            .root(args.root)
            .output(args.output)
            .dirs(args.dirs)
            .extensions(args.extensions)
            .exclude(args.exclude)
            .build()
    }
}

impl TryFrom<ProjectArgs> for ProjectConfig {
    type Error = ProjectConfigBuilderError;

    fn try_from(args: ProjectArgs) -> Result<Self, Self::Error> {
        let header_source: engine_options::HeaderSource = args.headers.into();
        ProjectConfigBuilder::default()
            .config_file(args.config)
            .output(args.output)
            .header_source(header_source)
            .root_token(args.root_token)
            .build()
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::HeaderSource,
    engine_options::HeaderSource,
    Fixed,
    Declared,
    Both
);
