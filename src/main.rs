use fountain_importer::{FountainImporter, ImportConf, ScreenplayDocument};
use std::env;
use std::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fountain_importer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <fountain_file> [conf.json]", args[0]);
        return;
    }

    let file_path = &args[1];

    let config = match args.get(2) {
        Some(conf_path) => match ImportConf::from_json_file(conf_path) {
            Ok(conf) => conf,
            Err(e) => {
                println!("读取配置失败: {}", e);
                return;
            }
        },
        None => ImportConf::default(),
    };

    let mut importer = FountainImporter::new(config);
    let mut document = ScreenplayDocument::new();

    match importer.import_file(file_path, &mut document) {
        Ok(summary) => {
            println!("导入完成！");
            println!("行数: {}", summary.lines);
            println!("场景数量: {}", summary.scenes);
            println!("分隔数量: {}", summary.breaks);
            println!("角色数量: {}", document.characters.len());
            println!("忽略行数: {}", summary.ignored_lines);

            match serde_json::to_string_pretty(&document) {
                Ok(json) => {
                    let json_path = format!("{}.json", file_path);
                    match fs::write(&json_path, json) {
                        Ok(_) => println!("JSON输出已保存到: {}", json_path),
                        Err(e) => println!("写入JSON失败: {}", e),
                    }
                }
                Err(e) => println!("序列化失败: {}", e),
            }
        },
        Err(e) => {
            println!("读取文件失败: {}", e);
        }
    }
}
