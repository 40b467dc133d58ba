use algodemo::config::MAX_CIRCULAR_CAPACITY;
use algodemo::{
    decimal_to_binary, is_balanced, minimum_moves, reverse_string,
    segmented_sieve, segmented_sieve_with, sieve_of_eratosthenes, tower_of_hanoi, CircularQueue,
    Config, Graph, Move, PriorityQueue, Queue, Session, SessionKind,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "algodemo")]
#[command(about = "Demonstrations of classical algorithms and data structures")]
#[command(version)]
struct Args {
    /// Configuration file (overrides ALGODEMO_CONFIG and ./algodemo.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Demo,
}

#[derive(Subcommand, Debug)]
enum Demo {
    /// Breadth-first traversal, BFS levels and shortest path
    Graph {
        /// Directed edge as SOURCE,TARGET (repeatable). Without edges the built-in graphs are used
        #[arg(short, long = "edge", value_parser = parse_edge)]
        edges: Vec<(String, String)>,

        /// Start vertex
        #[arg(short, long)]
        start: Option<String>,

        /// Target vertex for the shortest path query
        #[arg(short, long)]
        to: Option<String>,
    },
    /// FIFO, circular and priority queues
    Queue {
        /// Circular queue capacity (defaults to queue.circular_capacity)
        #[arg(short, long)]
        capacity: Option<usize>,
    },
    /// Primes up to LIMIT with the Sieve of Eratosthenes
    Sieve {
        limit: usize,

        /// Use the memory-bounded segmented sieve
        #[arg(long)]
        segmented: bool,
    },
    /// String reversal, bracket balance and binary conversion with a stack
    Stack {
        /// Expressions to reverse and check for balanced brackets
        expressions: Vec<String>,

        /// Decimal numbers to convert to binary (repeatable)
        #[arg(short, long = "number")]
        numbers: Vec<u64>,
    },
    /// Tower of Hanoi solution
    Hanoi {
        disks: u32,

        #[arg(long)]
        source: Option<String>,

        #[arg(long)]
        destination: Option<String>,

        #[arg(long)]
        auxiliary: Option<String>,
    },
    /// Interactive stack or queue
    Repl {
        /// stack or queue
        kind: SessionKind,
    },
}

fn parse_edge(raw: &str) -> std::result::Result<(String, String), String> {
    let (source, target) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected SOURCE,TARGET but got '{}'", raw))?;
    let (source, target) = (source.trim(), target.trim());
    if source.is_empty() || target.is_empty() {
        return Err(format!("empty vertex in edge '{}'", raw));
    }
    Ok((source.to_string(), target.to_string()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", config.demo.log_level.as_str()),
    )
    .init();

    log::debug!("algodemo v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Demo::Graph { edges, start, to } => run_graph(edges, start, to, args.json),
        Demo::Queue { capacity } => run_queue(
            capacity.unwrap_or(config.queue.circular_capacity),
            args.json,
        ),
        Demo::Sieve { limit, segmented } => run_sieve(&config, limit, segmented, args.json),
        Demo::Stack {
            expressions,
            numbers,
        } => run_stack(expressions, numbers, args.json),
        Demo::Hanoi {
            disks,
            source,
            destination,
            auxiliary,
        } => {
            let hanoi = &config.hanoi;
            let pegs = [
                source.unwrap_or_else(|| hanoi.source.clone()),
                destination.unwrap_or_else(|| hanoi.destination.clone()),
                auxiliary.unwrap_or_else(|| hanoi.auxiliary.clone()),
            ];
            run_hanoi(disks, pegs, hanoi.max_listed_disks, args.json)
        }
        Demo::Repl { kind } => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Session::new(kind)
                .run(stdin.lock(), stdout.lock())
                .context("Interactive session failed")
        }
    }
}

/// Print `report` as JSON, or hand it to `render` for the human-readable form.
fn emit<T: Serialize>(json: bool, report: &T, render: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        render(report);
    }
    Ok(())
}

fn banner(title: &str) {
    println!("{}", "=".repeat(50));
    println!("{}", title);
    println!("{}", "=".repeat(50));
}

#[derive(Debug, Serialize)]
struct GraphReport {
    adjacency: Vec<(String, Vec<String>)>,
    start: String,
    order: Vec<String>,
    /// `(vertex, level)` in discovery order
    levels: Vec<(String, usize)>,
    shortest_path: Option<PathReport>,
}

#[derive(Debug, Serialize)]
struct PathReport {
    from: String,
    to: String,
    path: Option<Vec<String>>,
}

fn build_graph<'a>(edges: impl IntoIterator<Item = (&'a str, &'a str)>) -> Graph<String> {
    edges
        .into_iter()
        .map(|(u, v)| (u.to_string(), v.to_string()))
        .collect()
}

fn graph_report(graph: &Graph<String>, start: String, to: Option<String>) -> GraphReport {
    let order = graph.traverse(start.clone());
    let levels_map = graph.traverse_with_levels(start.clone());
    let levels = order
        .iter()
        .filter_map(|v| levels_map.get(v).map(|level| (v.clone(), *level)))
        .collect();
    let shortest_path = to.map(|to| PathReport {
        path: graph.shortest_path(start.clone(), to.clone()),
        from: start.clone(),
        to,
    });

    GraphReport {
        adjacency: graph
            .adjacency()
            .map(|(u, vs)| (u.clone(), vs.to_vec()))
            .collect(),
        start,
        order,
        levels,
        shortest_path,
    }
}

fn run_graph(
    edges: Vec<(String, String)>,
    start: Option<String>,
    to: Option<String>,
    json: bool,
) -> Result<()> {
    let reports = if edges.is_empty() {
        let numeric = build_graph([("0", "1"), ("0", "2"), ("1", "2"), ("2", "0"), ("2", "3"), ("3", "3")]);
        let letters = build_graph([
            ("A", "B"),
            ("A", "C"),
            ("B", "D"),
            ("C", "D"),
            ("C", "E"),
            ("D", "E"),
            ("D", "F"),
            ("E", "F"),
        ]);
        vec![
            graph_report(&numeric, start.unwrap_or_else(|| "2".to_string()), to),
            graph_report(&letters, "A".to_string(), Some("F".to_string())),
        ]
    } else {
        let graph: Graph<String> = edges.into_iter().collect();
        let start = match start {
            Some(start) => start,
            None => graph
                .adjacency()
                .next()
                .map(|(first, _)| first.clone())
                .context("Graph has no vertices")?,
        };
        vec![graph_report(&graph, start, to)]
    };

    emit(json, &reports, |reports| {
        banner("BREADTH FIRST SEARCH (BFS)");
        for report in reports {
            println!("\nGraph edges:");
            for (vertex, neighbors) in &report.adjacency {
                println!("{} -> [{}]", vertex, neighbors.join(", "));
            }
            println!("\nBFS starting from vertex {}:", report.start);
            println!("Traversal order: [{}]", report.order.join(", "));
            println!("\nBFS with levels from vertex {}:", report.start);
            for (vertex, level) in &report.levels {
                println!("Vertex {}: Level {}", vertex, level);
            }
            if let Some(path) = &report.shortest_path {
                match &path.path {
                    Some(vertices) => println!(
                        "\nShortest path from {} to {}: {}",
                        path.from,
                        path.to,
                        vertices.join(" -> ")
                    ),
                    None => println!("\nNo path from {} to {}", path.from, path.to),
                }
            }
        }
    })
}

#[derive(Debug, Serialize)]
struct QueueReport {
    fifo_front: Option<String>,
    fifo_dequeued: Vec<String>,
    fifo_remaining: Vec<String>,
    circular_capacity: usize,
    circular_rejected: Vec<usize>,
    circular_dequeued: Vec<usize>,
    circular_contents: Vec<usize>,
    priority_order: Vec<(u32, String)>,
}

fn run_queue(capacity: usize, json: bool) -> Result<()> {
    if capacity == 0 {
        anyhow::bail!("Circular queue capacity must be greater than 0");
    }
    if capacity > MAX_CIRCULAR_CAPACITY {
        anyhow::bail!(
            "Circular queue capacity must be at most {}",
            MAX_CIRCULAR_CAPACITY
        );
    }

    let mut fifo: Queue<String> = ["First", "Second", "Third", "Fourth"]
        .into_iter()
        .map(String::from)
        .collect();
    let fifo_front = fifo.peek().cloned();
    let fifo_dequeued = std::iter::from_fn(|| fifo.dequeue()).take(2).collect();
    let fifo_remaining = fifo.iter().cloned().collect();

    let mut circular = CircularQueue::new(capacity);
    let circular_rejected = (1..=capacity + 1)
        .filter_map(|i| circular.enqueue(i).err())
        .collect();
    let circular_dequeued = std::iter::from_fn(|| circular.dequeue()).take(2).collect();
    for i in capacity + 1..=capacity + 2 {
        if let Err(rejected) = circular.enqueue(i) {
            log::warn!("Circular queue rejected {}", rejected);
        }
    }
    let circular_contents = circular.iter().copied().collect();

    let mut tasks = PriorityQueue::new();
    tasks.enqueue("Low priority task".to_string(), 5u32);
    tasks.enqueue("High priority task".to_string(), 1);
    tasks.enqueue("Medium priority task".to_string(), 3);
    tasks.enqueue("Critical task".to_string(), 0);
    let priority_order = tasks.into_sorted_vec();

    let report = QueueReport {
        fifo_front,
        fifo_dequeued,
        fifo_remaining,
        circular_capacity: capacity,
        circular_rejected,
        circular_dequeued,
        circular_contents,
        priority_order,
    };

    emit(json, &report, |r| {
        banner("QUEUE DATA STRUCTURE DEMONSTRATION");
        println!("\n1. Basic Queue (FIFO):");
        if let Some(front) = &r.fifo_front {
            println!("Front item: {}", front);
        }
        for item in &r.fifo_dequeued {
            println!("Dequeued: {}", item);
        }
        println!("Queue (front to rear): [{}]", r.fifo_remaining.join(", "));

        println!("\n2. Circular Queue (capacity {}):", r.circular_capacity);
        for item in &r.circular_rejected {
            println!("Queue is full! Rejected {}", item);
        }
        for item in &r.circular_dequeued {
            println!("Dequeued: {}", item);
        }
        println!("Circular Queue after wrap-around: {:?}", r.circular_contents);

        println!("\n3. Priority Queue:");
        for (priority, task) in &r.priority_order {
            println!("  Processing ({}): {}", priority, task);
        }
    })
}

#[derive(Debug, Serialize)]
struct SieveReport {
    limit: usize,
    segmented: bool,
    count: usize,
    primes: Vec<usize>,
}

fn run_sieve(config: &Config, limit: usize, segmented: bool, json: bool) -> Result<()> {
    let primes = match (segmented, config.segment_size()) {
        (true, Some(segment_size)) => segmented_sieve_with(limit, segment_size)?,
        (true, None) => segmented_sieve(limit),
        (false, _) => sieve_of_eratosthenes(limit),
    };

    let report = SieveReport {
        limit,
        segmented,
        count: primes.len(),
        primes,
    };

    emit(json, &report, |r| {
        banner("SIEVE OF ERATOSTHENES");
        if r.limit < 2 {
            println!("\nNo prime numbers exist below 2.");
            return;
        }
        println!("\nPrime numbers up to {}:", r.limit);
        for row in r.primes.chunks(10) {
            println!("{:?}", row);
        }
        println!("\nTotal count: {}", r.count);
    })
}

#[derive(Debug, Serialize)]
struct StackReport {
    reversed: Vec<(String, String)>,
    balanced: Vec<(String, bool)>,
    binary: Vec<(u64, String)>,
}

fn run_stack(expressions: Vec<String>, numbers: Vec<u64>, json: bool) -> Result<()> {
    let (to_reverse, to_check) = if expressions.is_empty() {
        (
            vec!["Hello, World!".to_string()],
            ["{[()]}", "{[(])}", "((()))", "((())", "{[}]"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    } else {
        (expressions.clone(), expressions)
    };
    let numbers = if numbers.is_empty() {
        vec![10, 25, 42, 100]
    } else {
        numbers
    };

    let report = StackReport {
        reversed: to_reverse
            .into_iter()
            .map(|text| {
                let reversed = reverse_string(&text);
                (text, reversed)
            })
            .collect(),
        balanced: to_check
            .into_iter()
            .map(|expr| {
                let balanced = is_balanced(&expr);
                (expr, balanced)
            })
            .collect(),
        binary: numbers
            .into_iter()
            .map(|n| (n, decimal_to_binary(n)))
            .collect(),
    };

    emit(json, &report, |r| {
        banner("STACK DATA STRUCTURE DEMONSTRATION");
        println!("\n1. String Reversal Using Stack:");
        for (original, reversed) in &r.reversed {
            println!("Original: {}", original);
            println!("Reversed: {}", reversed);
        }
        println!("\n2. Balanced Parentheses Checker:");
        for (expr, balanced) in &r.balanced {
            let verdict = if *balanced { "Balanced" } else { "Not Balanced" };
            println!("{}: {}", expr, verdict);
        }
        println!("\n3. Decimal to Binary Conversion:");
        for (number, binary) in &r.binary {
            println!("{} = {}", number, binary);
        }
    })
}

#[derive(Debug, Serialize)]
struct HanoiReport {
    disks: u32,
    minimum_moves: Option<u64>,
    /// Omitted for puzzles above the configured listing limit
    moves: Option<Vec<Move>>,
}

fn run_hanoi(disks: u32, pegs: [String; 3], max_listed_disks: u32, json: bool) -> Result<()> {
    if disks == 0 {
        anyhow::bail!("Please enter a positive number of disks");
    }
    let [source, destination, auxiliary] = pegs;
    if source == destination || source == auxiliary || destination == auxiliary {
        anyhow::bail!("Peg names must be distinct");
    }

    let moves = if disks <= max_listed_disks {
        Some(tower_of_hanoi(disks, &source, &destination, &auxiliary))
    } else {
        log::info!(
            "{} disks exceeds the listing limit of {}; reporting the move count only",
            disks,
            max_listed_disks
        );
        None
    };

    let report = HanoiReport {
        disks,
        minimum_moves: minimum_moves(disks),
        moves,
    };

    emit(json, &report, |r| {
        banner("TOWER OF HANOI SOLVER");
        match r.minimum_moves {
            Some(count) => println!("\nMinimum moves required: {}", count),
            None => println!("\nMinimum moves required: 2^{} - 1", r.disks),
        }
        if let Some(moves) = &r.moves {
            println!("\nSolution:");
            println!("{}", "-".repeat(50));
            for step in moves {
                println!("{}", step);
            }
            println!("{}", "-".repeat(50));
            println!("\nTotal moves: {}", moves.len());
        }
    })
}
