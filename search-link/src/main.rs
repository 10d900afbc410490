use clap::{Arg, ArgAction, ArgMatches, Command};

use query_common::{Navigation, QueryDescriptor};
use search_form::{render_keywords, submit, FilterItem, FilterState, FormState, PagerRequest};

// 主函数
fn main() {
    // 设置命令行参数
    let matches = Command::new("搜索链接生成器")
        .version(env!("CARGO_PKG_VERSION"))
        .about("由筛选条件生成搜索结果链接，或解析已有链接")
        .subcommand_required(true)
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("显示详细信息")
            .global(true)
            .action(ArgAction::SetTrue))
        .subcommand(Command::new("search")
            .about("生成搜索链接")
            .arg(Arg::new("keywords")
                .short('k')
                .long("keywords")
                .value_name("TEXT")
                .help("关键词，以空格分隔，支持 - * -* 前缀"))
            .arg(Arg::new("tag")
                .short('t')
                .long("tag")
                .value_name("TAG")
                .help("标签筛选，以 ! 开头表示排除，可重复")
                .action(ArgAction::Append))
            .arg(Arg::new("year")
                .short('y')
                .long("year")
                .value_name("LABEL")
                .help("年份标签: Now、2010、(2001..2005)、(2015..)、(..2000)，可重复")
                .action(ArgAction::Append))
            .arg(Arg::new("user")
                .short('u')
                .long("user")
                .value_name("USER")
                .help("用户名或用户 ID"))
            .arg(Arg::new("r18")
                .long("r18")
                .value_name("MODE")
                .help("R18 筛选")
                .value_parser(["any", "yes", "no"])
                .default_value("any"))
            .arg(Arg::new("fav")
                .long("fav")
                .value_name("MODE")
                .help("收藏筛选")
                .value_parser(["any", "yes", "no"])
                .default_value("any")))
        .subcommand(Command::new("decode")
            .about("解析站内链接")
            .arg(Arg::new("path")
                .value_name("PATH")
                .help("形如 /search/<查询>/<排序>/<偏移> 或 /<排序>/<偏移>")
                .required(true)))
        .subcommand(Command::new("page")
            .about("生成翻页链接")
            .arg(Arg::new("page")
                .value_name("PAGE")
                .help("目标页码")
                .value_parser(clap::value_parser!(i64))
                .required(true))
            .arg(Arg::new("max")
                .long("max")
                .value_name("MAX")
                .help("最大页码")
                .value_parser(clap::value_parser!(i64))
                .required(true))
            .arg(Arg::new("order")
                .short('o')
                .long("order")
                .value_name("INDEX")
                .help("排序下标 0-9")
                .value_parser(clap::value_parser!(usize))
                .default_value("1"))
            .arg(Arg::new("base")
                .short('b')
                .long("base")
                .value_name("BASE")
                .help("结果页基础路径，默认列表为空")))
        .get_matches();

    let verbose = matches.get_flag("verbose");

    let result = match matches.subcommand() {
        Some(("search", sub)) => search_link(sub, verbose),
        Some(("decode", sub)) => decode_link(sub, verbose),
        Some(("page", sub)) => page_link(sub, verbose),
        _ => Err("未知的子命令".to_string()),
    };

    if let Err(e) = result {
        eprintln!("错误: {}", e);
        std::process::exit(1);
    }
}

fn mode_state(mode: &str) -> FilterState {
    match mode {
        "yes" => FilterState::Positive,
        "no" => FilterState::Negative,
        _ => FilterState::Neutral,
    }
}

fn values(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

// 由命令行参数构造表单快照并生成链接
fn search_link(matches: &ArgMatches, verbose: bool) -> Result<(), String> {
    let tags = values(matches, "tag")
        .into_iter()
        .map(|tag| match tag.strip_prefix('!') {
            Some(name) => FilterItem::with_state(name, FilterState::Negative),
            None => FilterItem::with_state(tag.as_str(), FilterState::Positive),
        })
        .collect();
    let years = values(matches, "year")
        .into_iter()
        .map(|label| FilterItem::with_state(label, FilterState::Positive))
        .collect();

    let form = FormState {
        keyword_text: matches.get_one::<String>("keywords").cloned().unwrap_or_default(),
        tags,
        years,
        user_text: matches.get_one::<String>("user").cloned().unwrap_or_default(),
        r18: mode_state(matches.get_one::<String>("r18").map(String::as_str).unwrap_or("any")),
        fav: mode_state(matches.get_one::<String>("fav").map(String::as_str).unwrap_or("any")),
    };

    let nav = submit(&form).map_err(|e| e.to_string())?;
    if verbose {
        match &nav {
            Navigation::Search { query, .. } => println!("查询字符串: {} ({} 字节)", query, query.len()),
            Navigation::Listing { .. } => println!("无筛选条件，使用默认列表"),
        }
    }
    println!("{}", nav);
    Ok(())
}

// 解析站内链接并输出查询内容
fn decode_link(matches: &ArgMatches, verbose: bool) -> Result<(), String> {
    let path = matches.get_one::<String>("path").ok_or("缺少链接")?;
    let nav = Navigation::parse(path).map_err(|e| e.to_string())?;

    let (descriptor, offset) = match &nav {
        Navigation::Search { query, offset, .. } => {
            (query_common::decode(query).map_err(|e| e.to_string())?, *offset)
        }
        Navigation::Listing { offset, .. } => (QueryDescriptor::default(), *offset),
    };

    println!("排序: {}", nav.order());
    println!("偏移: {}", offset);
    println!("关键词: {}", render_keywords(&descriptor.keywords));
    if verbose {
        let pretty = serde_json::to_string_pretty(&descriptor).map_err(|e| e.to_string())?;
        println!("{}", pretty);
    }
    Ok(())
}

// 生成翻页链接
fn page_link(matches: &ArgMatches, verbose: bool) -> Result<(), String> {
    let request = PagerRequest {
        page_number: *matches.get_one::<i64>("page").ok_or("缺少页码")?,
        min: 1,
        max: *matches.get_one::<i64>("max").ok_or("缺少最大页码")?,
        ordering_index: *matches.get_one::<usize>("order").ok_or("缺少排序")?,
        base_path: matches.get_one::<String>("base").cloned().unwrap_or_default(),
    };

    match request.target().map_err(|e| e.to_string())? {
        Some(url) => {
            println!("{}", url);
            Ok(())
        }
        None => {
            if verbose {
                println!("页码 {} 不在 [{}, {}] 范围内", request.page_number, request.min, request.max);
            }
            Err("页码越界".to_string())
        }
    }
}
