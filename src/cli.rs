use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shop-search")]
#[command(about = "飲食店サーチ（初回サーチ → 店舗選択 → 個別サーチ・合致度判定）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 検索条件で店舗を探し、選んだ店舗を個別サーチ
    Search {
        /// 検索条件（省略時は対話入力）
        query: Option<String>,

        /// 個別サーチする店舗番号（1始まり、複数指定可）
        #[arg(short, long = "select", value_name = "N")]
        select: Vec<usize>,

        /// 全店舗を個別サーチ
        #[arg(short, long, conflicts_with = "select")]
        all: bool,

        /// 店舗リストまでで終了（個別サーチしない）
        #[arg(long, conflicts_with_all = ["select", "all"])]
        list_only: bool,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// バックエンドの稼働確認
    Health,

    /// 設定
    Config {
        /// 接続先URLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
