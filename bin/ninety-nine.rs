use std::fmt::Display;

use clap::Parser;
use colored::*;
use derive_more::Display;
use ninety_nine::config::{LoggingConfig, NinetyNineConfig};
use ninety_nine::{arithmetic, list, logic, List, Nested, Result, Tree};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "ninety-nine.toml")]
    config: String,

    /// 生成默认配置文件并退出
    #[arg(long)]
    generate_config: bool,

    /// Random seed (overrides config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level (overrides config file)
    #[arg(long)]
    log_level: Option<String>,

    /// Run a single problem, e.g. P26 or P26B
    #[arg(short, long)]
    problem: Option<String>,

    /// Print the P57 tree as JSON
    #[arg(long)]
    json: bool,
}

/// 题目编号，例如 P07、P26B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "P{:02}{}", number, variant)]
struct ProblemId {
    number: u8,
    variant: &'static str,
}

const fn problem(number: u8) -> ProblemId {
    ProblemId {
        number,
        variant: "",
    }
}

/// 一道题目：编号、标题和运行函数
struct Problem {
    id: ProblemId,
    title: &'static str,
    run: fn(&mut Playground) -> Result<Vec<String>>,
}

/// 运行题目时共享的状态
struct Playground {
    config: NinetyNineConfig,
    rng: StdRng,
    json: bool,
}

fn show<T: Display>(label: &str, value: T) -> String {
    format!("{} => {}", label, value)
}

fn fib() -> List<i32> {
    list![1, 1, 2, 3, 5, 8]
}

fn letters() -> List<&'static str> {
    list!["a", "a", "a", "a", "b", "c", "c", "a", "a", "d", "e", "e", "e", "e"]
}

fn alphabet() -> List<&'static str> {
    list!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"]
}

fn catalog() -> Vec<Problem> {
    vec![
        Problem {
            id: problem(1),
            title: "Find the last element of a list",
            run: |_| {
                Ok(vec![
                    show("[1, 1, 2, 3, 5, 8].last", fib().last()?),
                    show("[1].last", list![1].last()?),
                ])
            },
        },
        Problem {
            id: problem(2),
            title: "Find the last but one element of a list",
            run: |_| {
                Ok(vec![
                    show("[1, 1, 2, 3, 5, 8].penultimate", format!("{:?}", fib().penultimate())),
                    show("[1].penultimate", format!("{:?}", list![1].penultimate())),
                ])
            },
        },
        Problem {
            id: problem(3),
            title: "Find the Kth element of a list",
            run: |_| {
                Ok(vec![
                    show("nth(2)", format!("{:?}", fib().nth(2))),
                    show("nth(10)", format!("{:?}", fib().nth(10))),
                    show("nth_from_end(1)", format!("{:?}", fib().nth_from_end(1))),
                ])
            },
        },
        Problem {
            id: problem(4),
            title: "Find the number of elements of a list",
            run: |_| Ok(vec![show("[1, 1, 2, 3, 5, 8].len", fib().len())]),
        },
        Problem {
            id: problem(5),
            title: "Reverse a list",
            run: |_| {
                let mut in_place = list![1, 1, 2, 1, 1];
                in_place.reverse_in_place();
                Ok(vec![
                    show("reverse", fib().reverse()),
                    show("reverse_in_place", in_place),
                ])
            },
        },
        Problem {
            id: problem(6),
            title: "Find out whether a list is a palindrome",
            run: |_| {
                Ok(vec![
                    show("[1, 1, 2, 3, 5, 8]", fib().is_palindrome()),
                    show("[1, 1, 2, 1, 1]", list![1, 1, 2, 1, 1].is_palindrome()),
                ])
            },
        },
        Problem {
            id: problem(7),
            title: "Flatten a nested list structure",
            run: |_| {
                let nested = list![
                    Nested::list(vec![Nested::value(1), Nested::value(1)]),
                    Nested::value(2),
                    Nested::list(vec![
                        Nested::value(3),
                        Nested::list(vec![Nested::value(5), Nested::value(8)]),
                    ]),
                ];
                Ok(vec![show(&nested.to_string(), nested.flatten())])
            },
        },
        Problem {
            id: problem(8),
            title: "Eliminate consecutive duplicates of list elements",
            run: |_| Ok(vec![show("compress", letters().compress())]),
        },
        Problem {
            id: problem(9),
            title: "Pack consecutive duplicates of list elements into sublists",
            run: |_| Ok(vec![show("pack", letters().pack())]),
        },
        Problem {
            id: problem(10),
            title: "Run-length encoding of a list",
            run: |_| Ok(vec![show("encode", format!("{:?}", letters().encode()))]),
        },
        Problem {
            id: problem(11),
            title: "Modified run-length encoding",
            run: |_| Ok(vec![show("encode_modified", letters().encode_modified())]),
        },
        Problem {
            id: problem(12),
            title: "Decode a run-length encoded list",
            run: |_| {
                let encoded: List<(usize, &str)> =
                    list![(4, "a"), (1, "b"), (2, "c"), (2, "a"), (1, "d"), (4, "e")];
                Ok(vec![show("decode", encoded.decode())])
            },
        },
        Problem {
            id: problem(13),
            title: "Run-length encoding of a list (direct solution)",
            run: |_| {
                Ok(vec![show(
                    "encode_direct",
                    format!("{:?}", letters().encode_direct()),
                )])
            },
        },
        Problem {
            id: problem(14),
            title: "Duplicate the elements of a list",
            run: |_| Ok(vec![show("duplicate", list!["a", "b", "c", "c", "d"].duplicate())]),
        },
        Problem {
            id: problem(15),
            title: "Duplicate the elements of a list a given number of times",
            run: |_| {
                Ok(vec![show(
                    "duplicate_n(3)",
                    list!["a", "b", "c", "c", "d"].duplicate_n(3),
                )])
            },
        },
        Problem {
            id: problem(16),
            title: "Drop every Nth element from a list",
            run: |_| {
                let mut lines = vec![show("drop_every(3)", alphabet().drop_every(3)?)];
                if let Err(e) = fib().drop_every(0) {
                    lines.push(show("drop_every(0)", e));
                }
                Ok(lines)
            },
        },
        Problem {
            id: problem(17),
            title: "Split a list into two parts",
            run: |_| {
                let (left, right) = alphabet().split(3);
                Ok(vec![show("split(3)", format!("({}, {})", left, right))])
            },
        },
        Problem {
            id: problem(18),
            title: "Extract a slice from a list",
            run: |_| Ok(vec![show("slice(3, 7)", alphabet().slice(3, 7))]),
        },
        Problem {
            id: problem(19),
            title: "Rotate a list N places to the left",
            run: |_| {
                Ok(vec![
                    show("rotate(3)", alphabet().rotate(3)),
                    show("rotate(-2)", alphabet().rotate(-2)),
                ])
            },
        },
        Problem {
            id: problem(20),
            title: "Remove the Kth element from a list",
            run: |_| {
                let (remaining, removed) = list!["a", "b", "c", "d"].remove_at(1);
                Ok(vec![show(
                    "remove_at(1)",
                    format!("({}, {:?})", remaining, removed),
                )])
            },
        },
        Problem {
            id: problem(21),
            title: "Insert an element at a given position into a list",
            run: |_| {
                Ok(vec![show(
                    "insert_at(1, new)",
                    list!["a", "b", "c", "d"].insert_at(1, "new"),
                )])
            },
        },
        Problem {
            id: problem(22),
            title: "Create a list containing all integers within a given range",
            run: |_| Ok(vec![show("range(4, 9)", List::range(4, 9)?)]),
        },
        Problem {
            id: problem(23),
            title: "Extract a given number of randomly selected elements from a list",
            run: |playground| {
                let source = list!["a", "b", "c", "d", "e", "f", "g", "h"];
                Ok(vec![show(
                    "random_select(3)",
                    source.random_select(3, &mut playground.rng),
                )])
            },
        },
        Problem {
            id: problem(24),
            title: "Lotto: Draw N different random numbers from the set 1..M",
            run: |playground| {
                let lotto = &playground.config.lotto;
                let label = format!("lotto({}, {})", lotto.numbers, lotto.maximum);
                let draw = List::lotto(lotto.numbers, lotto.maximum, &mut playground.rng)?;
                Ok(vec![show(&label, draw)])
            },
        },
        Problem {
            id: problem(25),
            title: "Generate a random permutation of the elements of a list",
            run: |playground| {
                let source = list!["a", "b", "c", "d", "e", "f"];
                Ok(vec![show(
                    "random_permute",
                    source.random_permute(&mut playground.rng),
                )])
            },
        },
        Problem {
            id: problem(26),
            title: "Generate the combinations of K distinct objects chosen from N",
            run: |playground| {
                let settings = &playground.config.combinatorics;
                let pool: List<usize> = (1..=settings.pool_size).collect();
                Ok(vec![
                    show(
                        &format!("C({}, {})", settings.pool_size, settings.committee_size),
                        pool.combinations(settings.committee_size).len(),
                    ),
                    show("[a, b, c].combinations(2)", list!["a", "b", "c"].combinations(2)),
                ])
            },
        },
        Problem {
            id: ProblemId {
                number: 26,
                variant: "B",
            },
            title: "Generate the permutations of K distinct objects chosen from N",
            run: |playground| {
                let settings = &playground.config.combinatorics;
                let pool: List<usize> = (1..=settings.pool_size).collect();
                Ok(vec![
                    show(
                        &format!("P({}, {})", settings.pool_size, settings.committee_size),
                        pool.permutations(settings.committee_size).len(),
                    ),
                    show("[a, b, c].permutations(2)", list!["a", "b", "c"].permutations(2)),
                ])
            },
        },
        Problem {
            id: problem(27),
            title: "Group the elements of a set into disjoint subsets",
            run: |_| {
                let people = list![
                    "Aldo", "Beat", "Carla", "David", "Evi", "Flip", "Gary", "Hugo", "Ida"
                ];
                let groupings = people.group(&[2, 3, 4]);
                let mut lines = vec![show("group(2, 3, 4) count", groupings.len())];
                if let Some(first) = groupings.head() {
                    lines.push(show("first", first));
                }
                Ok(lines)
            },
        },
        Problem {
            id: problem(28),
            title: "Sorting a list of lists according to length of sublists",
            run: |_| {
                let lists = list![
                    list!["a", "b", "c"],
                    list!["d", "e"],
                    list!["f", "g", "h"],
                    list!["d", "e"],
                    list!["i", "j", "k", "l"],
                    list!["m", "n"],
                    list!["o"]
                ];
                Ok(vec![
                    show("lsort", lists.lsort()),
                    show("lsort_freq", lists.lsort_freq()),
                ])
            },
        },
        Problem {
            id: problem(31),
            title: "Determine whether a given integer number is prime",
            run: |_| {
                let primes: List<u64> = (0..50).filter(|n| arithmetic::is_prime(*n)).collect();
                Ok(vec![show("primes below 50", primes)])
            },
        },
        Problem {
            id: problem(46),
            title: "Truth tables for logical expressions",
            run: |_| {
                let mut lines = vec![logic::TABLE_HEADER.to_string()];
                lines.extend(
                    logic::table(|a, b| logic::and(a, logic::or(a, b)))
                        .iter()
                        .map(|row| row.to_string()),
                );
                Ok(lines)
            },
        },
        Problem {
            id: problem(55),
            title: "Construct completely balanced binary trees",
            run: |_| {
                Ok(Tree::c_balanced(4, "x")
                    .iter()
                    .map(|tree| tree.to_string())
                    .collect())
            },
        },
        Problem {
            id: problem(56),
            title: "Symmetric binary trees",
            run: |_| {
                let symmetric = Tree::from_list(&list![5, 3, 18, 1, 4, 12, 21])
                    .map_or(false, |tree| tree.is_symmetric());
                let lopsided = Tree::from_list(&list![3, 2, 5, 7, 4])
                    .map_or(false, |tree| tree.is_symmetric());
                Ok(vec![
                    show("[5, 3, 18, 1, 4, 12, 21]", symmetric),
                    show("[3, 2, 5, 7, 4]", lopsided),
                ])
            },
        },
        Problem {
            id: problem(57),
            title: "Binary search trees (dictionaries)",
            run: |playground| {
                let Some(tree) = Tree::from_list(&list![3, 2, 5, 7, 1]) else {
                    return Ok(Vec::new());
                };
                if playground.json {
                    return Ok(vec![tree.export_to_json()?]);
                }
                Ok(vec![show("from_list([3, 2, 5, 7, 1])", tree)])
            },
        },
    ]
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 生成默认配置文件
    if args.generate_config {
        let config = NinetyNineConfig::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        return Ok(());
    }

    // 加载配置
    let mut config = NinetyNineConfig::from_file(&args.config)?;

    // 命令行参数覆盖配置文件
    if let Some(seed) = args.seed {
        config.random.seed = Some(seed);
    }
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }

    // 验证配置
    config.validate()?;

    // 初始化日志系统
    init_logging(&config.logging)?;

    info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));
    config.print_summary();

    let rng = match config.random.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut playground = Playground {
        config,
        rng,
        json: args.json,
    };

    let problems: Vec<Problem> = catalog()
        .into_iter()
        .filter(|problem| match &args.problem {
            Some(wanted) => problem.id.to_string().eq_ignore_ascii_case(wanted),
            None => true,
        })
        .collect();

    if problems.is_empty() {
        if let Some(wanted) = &args.problem {
            warn!("Unknown problem: {}", wanted);
            return Err(format!("Unknown problem: {}", wanted).into());
        }
    }

    for problem in problems {
        debug!(id = %problem.id, "running problem");
        println!("{} {}", problem.id.to_string().cyan().bold(), problem.title.bold());
        match (problem.run)(&mut playground) {
            Ok(lines) => {
                for line in lines {
                    println!("   {}", line);
                }
            }
            Err(e) => println!("   {}", format!("(error) {}", e).red()),
        }
        println!();
    }

    Ok(())
}

/// 初始化日志系统
fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    match (config.output.as_str(), &config.log_file) {
        ("file", Some(log_file)) => {
            // 确保日志目录存在
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(file)
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .init();
        }
    }

    Ok(())
}
