use std::sync::Arc;

use crate::adapters::{
    CommandRunner, FFmpegAdapter, FFprobeAdapter, HttpFetchAdapter, SplicerConfig,
};
use crate::app::cut_interactor::CutInteractor;
use crate::domain::errors::DomainError;
use crate::ports::{ExecutePort, FetchPort, ProbePort};

pub trait AppContainer: Send + Sync {
    fn cut_interactor(&self) -> Arc<CutInteractor>;
    fn probe_port(&self) -> Arc<dyn ProbePort>;
}

/// Wires the ffmpeg/ffprobe/HTTP adapters from a configuration
pub struct DefaultAppContainer {
    cut_interactor: Arc<CutInteractor>,
    probe_port: Arc<dyn ProbePort>,
}

impl DefaultAppContainer {
    pub fn new(config: &SplicerConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let runner = CommandRunner::new(config.tool_timeout());
        let probe_port: Arc<dyn ProbePort> =
            Arc::new(FFprobeAdapter::new(config.ffprobe_path.clone(), runner.clone()));
        let execute_port: Arc<dyn ExecutePort> =
            Arc::new(FFmpegAdapter::new(config.ffmpeg_path.clone(), runner));
        let fetch_port: Arc<dyn FetchPort> =
            Arc::new(HttpFetchAdapter::new(config.fetch_timeout())?);

        let cut_interactor = Arc::new(CutInteractor::new(
            fetch_port,
            Arc::clone(&probe_port),
            execute_port,
            config.work_dir.clone(),
            config.output_dir.clone(),
        ));

        Ok(Self {
            cut_interactor,
            probe_port,
        })
    }
}

impl AppContainer for DefaultAppContainer {
    fn cut_interactor(&self) -> Arc<CutInteractor> {
        Arc::clone(&self.cut_interactor)
    }

    fn probe_port(&self) -> Arc<dyn ProbePort> {
        Arc::clone(&self.probe_port)
    }
}
