//! `gridpath`: drives a [`Frontier`] through an A* search over an ASCII
//! map, including a mid-search retarget that exercises the rebuild path.
//!
//! Run with `RUST_LOG=debug cargo run -p wayfront-demos` to watch the
//! frontier's growth reallocations.

use wayfront_core::{NodeId, NodePool};
use wayfront_frontier::Frontier;

const W: usize = 24;
const H: usize = 10;

const MAP: &str = "\
........#...............
........#......#........
........#......#........
........#......#........
....#####......#........
....#..........#####....
....#..........#........
....#..........#........
....#..........#........
........................";

struct Grid {
    walls: Vec<bool>,
}

impl Grid {
    fn parse(map: &str) -> Self {
        let walls = map
            .lines()
            .flat_map(|line| line.bytes().map(|b| b == b'#'))
            .collect();
        Self { walls }
    }

    fn neighbors(&self, i: usize, buf: &mut Vec<usize>) {
        buf.clear();
        let (x, y) = (i % W, i / W);
        if x > 0 {
            buf.push(i - 1);
        }
        if x + 1 < W {
            buf.push(i + 1);
        }
        if y > 0 {
            buf.push(i - W);
        }
        if y + 1 < H {
            buf.push(i + W);
        }
        buf.retain(|&n| !self.walls[n]);
    }
}

fn manhattan(a: usize, b: usize) -> u32 {
    let (ax, ay) = ((a % W) as i64, (a / W) as i64);
    let (bx, by) = ((b % W) as i64, (b / W) as i64);
    ((ax - bx).abs() + (ay - by).abs()) as u32
}

/// One expansion step: pop the best candidate and relax its neighbors.
/// Returns the expanded node, or `None` once the frontier is drained.
fn expand(
    grid: &Grid,
    pool: &mut NodePool,
    frontier: &mut Frontier,
    goal: usize,
    nbuf: &mut Vec<usize>,
) -> Option<NodeId> {
    loop {
        if frontier.is_empty() {
            return None;
        }
        let current = frontier.pop();
        if pool[current].open {
            pool[current].open = false;
            let current_g = pool[current].g;

            grid.neighbors(current.index(), nbuf);
            for &n in &*nbuf {
                let nid = NodeId::new(n);
                let tentative = current_g + 1;
                let stale = pool.visit(nid);
                if !stale && pool[nid].g <= tentative {
                    continue;
                }
                let node = &mut pool[nid];
                node.g = tentative;
                node.f = tentative + manhattan(n, goal);
                node.parent = current;
                node.open = true;
                frontier
                    .push(nid, node.f, node.g)
                    .expect("demo grid fits well under the frontier ceiling");
            }
            return Some(current);
        }
        // Superseded entry for an already-closed node; keep popping.
    }
}

fn trace_path(pool: &NodePool, goal: NodeId) -> Vec<usize> {
    let mut path = Vec::new();
    let mut at = goal;
    while at.is_some() {
        path.push(at.index());
        at = pool[at].parent;
    }
    path.reverse();
    path
}

fn seed(pool: &mut NodePool, frontier: &mut Frontier, start: usize, goal: usize) {
    pool.begin_search();
    frontier.clear();
    let start_id = NodeId::new(start);
    pool.visit(start_id);
    pool[start_id].f = manhattan(start, goal);
    pool[start_id].open = true;
    frontier.push(start_id, pool[start_id].f, 0).unwrap();
}

fn render(grid: &Grid, path: &[usize]) {
    for y in 0..H {
        let mut line = String::with_capacity(W);
        for x in 0..W {
            let i = y * W + x;
            line.push(if grid.walls[i] {
                '#'
            } else if path.contains(&i) {
                '*'
            } else {
                '.'
            });
        }
        println!("{line}");
    }
}

fn main() {
    env_logger::init();

    let grid = Grid::parse(MAP);
    let mut pool = NodePool::new(W * H);
    let mut frontier = Frontier::new(16);
    let mut nbuf = Vec::with_capacity(4);

    // Plain search: top-left to bottom-right.
    let (start, goal) = (0, W * H - 1);
    seed(&mut pool, &mut frontier, start, goal);
    while let Some(reached) = expand(&grid, &mut pool, &mut frontier, goal, &mut nbuf) {
        if reached.index() == goal {
            let path = trace_path(&pool, reached);
            println!("reached {goal} in {} steps:", path.len() - 1);
            render(&grid, &path);
            break;
        }
    }

    // Retargeted search: start toward the bottom-right corner, then move
    // the goal to the top-right corner after a few dozen expansions. Every
    // queued entry's F score carries a now-wrong heuristic term, so the
    // frontier gets one rebuild instead of per-entry updates.
    let mut goal = W * H - 1;
    seed(&mut pool, &mut frontier, start, goal);
    let mut expanded = 0u32;
    let mut retargeted = false;
    while let Some(reached) = expand(&grid, &mut pool, &mut frontier, goal, &mut nbuf) {
        expanded += 1;
        if !retargeted && expanded == 40 {
            goal = W - 1;
            log::info!("goal moved to {goal}; reprioritizing {} entries", frontier.len());
            frontier.reprioritize(|node, _| pool[node].g + manhattan(node.index(), goal));
            retargeted = true;
        }
        if reached.index() == goal {
            let path = trace_path(&pool, reached);
            println!("after retarget, reached {goal} in {} steps:", path.len() - 1);
            render(&grid, &path);
            return;
        }
    }
    println!("goal unreachable");
}
