use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> std::process::ExitCode {
    // 提前加载 .env，使得 RUST_LOG / LOG_FORMAT / CONFIG_PATH 等环境变量生效
    dotenv().ok();

    // 先加载配置，再按 [logging] 初始化日志（只初始化一次）
    let cfg = match AppConfig::load_or_env() {
        Ok(cfg) => {
            server::startup::init_logging_for(&cfg);
            cfg
        }
        Err(e) => {
            let format = std::env::var("LOG_FORMAT")
                .map(|v| LogFormat::from_env_value(&v))
                .unwrap_or_default();
            init_logging(format);
            error!(service = "server", event = "config_invalid", error = %format_args!("{e:#}"), "failed to load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    info!(service = "server", event = "logger_init", json = cfg.logging.json, "tracing subscriber initialized");

    // 基础服务上下文（不含敏感信息）
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // Panic 钩子：捕获异常并输出错误日志
    std::panic::set_hook(Box::new({
        let service_id = service_id;
        move |info| {
            error!(
                service = "server",
                event = "panic",
                %service_id,
                pid,
                message = %info,
                "unhandled panic occurred"
            );
        }
    }));

    // 线程数：config.toml，其次环境变量 TOKIO_WORKER_THREADS（均已在配置加载时合并）
    let worker_threads = cfg.server.worker_threads;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = ?worker_threads,
        "server service starting"
    );

    // server::run 内部监听 Ctrl+C 并优雅停机，返回前关闭连接池
    rt.block_on(async move {
        match server::run(cfg).await {
            Ok(()) => {
                info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "server", event = "run_failed", %service_id, error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}
