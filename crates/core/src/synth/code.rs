//! Code fallback: a problem description from a small built-in catalog (or
//! the slug itself) and a solution from one of a few algorithm families.

use super::mentions_any;
use crate::payload::{AlternativeSolution, CodePayload, Problem, ProblemExample, Solution, SolutionBundle};
use crate::validation::CodeInput;

pub const SOLUTION_LANGUAGE: &str = "python";

struct KnownProblem {
    slug: &'static str,
    title: &'static str,
    difficulty: &'static str,
    description: &'static str,
    example: (&'static str, &'static str),
}

const CATALOG: &[KnownProblem] = &[
    KnownProblem {
        slug: "two-sum",
        title: "Two Sum",
        difficulty: "Easy",
        description: "Given an array of integers nums and an integer target, return indices of the two numbers such that they add up to target.",
        example: ("nums = [2,7,11,15], target = 9", "[0,1]"),
    },
    KnownProblem {
        slug: "add-two-numbers",
        title: "Add Two Numbers",
        difficulty: "Medium",
        description: "You are given two non-empty linked lists representing two non-negative integers stored in reverse order. Add the two numbers and return the sum as a linked list.",
        example: ("l1 = [2,4,3], l2 = [5,6,4]", "[7,0,8]"),
    },
    KnownProblem {
        slug: "longest-substring-without-repeating-characters",
        title: "Longest Substring Without Repeating Characters",
        difficulty: "Medium",
        description: "Given a string s, find the length of the longest substring without repeating characters.",
        example: ("s = \"abcabcbb\"", "3"),
    },
    KnownProblem {
        slug: "valid-parentheses",
        title: "Valid Parentheses",
        difficulty: "Easy",
        description: "Given a string s containing just the characters '(', ')', '{', '}', '[' and ']', determine if the input string is valid.",
        example: ("s = \"()[]{}\"", "true"),
    },
    KnownProblem {
        slug: "maximum-subarray",
        title: "Maximum Subarray",
        difficulty: "Medium",
        description: "Given an integer array nums, find the subarray with the largest sum, and return its sum.",
        example: ("nums = [-2,1,-3,4,-1,2,1,-5,4]", "6"),
    },
    KnownProblem {
        slug: "maximum-depth-of-binary-tree",
        title: "Maximum Depth of Binary Tree",
        difficulty: "Easy",
        description: "Given the root of a binary tree, return its maximum depth.",
        example: ("root = [3,9,20,null,null,15,7]", "3"),
    },
    KnownProblem {
        slug: "reverse-linked-list",
        title: "Reverse Linked List",
        difficulty: "Easy",
        description: "Given the head of a singly linked list, reverse the list, and return the reversed list.",
        example: ("head = [1,2,3,4,5]", "[5,4,3,2,1]"),
    },
];

/// `two-sum` -> `Two Sum`.
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Problem details when the problem site cannot be reached.
pub fn fallback_problem(slug: &str) -> Problem {
    if let Some(known) = CATALOG.iter().find(|p| p.slug == slug) {
        return Problem {
            title: known.title.to_string(),
            difficulty: known.difficulty.to_string(),
            description: known.description.to_string(),
            examples: vec![ProblemExample {
                input: known.example.0.to_string(),
                output: known.example.1.to_string(),
                explanation: None,
            }],
        };
    }

    let title = title_from_slug(slug);
    Problem {
        description: format!(
            "Solve the \"{title}\" problem. The full statement could not be retrieved; \
             the solution below follows the standard approach for this problem family."
        ),
        title,
        difficulty: "Medium".to_string(),
        examples: vec![ProblemExample {
            input: "See the problem page for sample input".to_string(),
            output: "See the problem page for sample output".to_string(),
            explanation: None,
        }],
    }
}

// ---------------------------------------------------------------------------
// Algorithm families
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    HashLookup,
    Tree,
    LinkedList,
    SlidingWindow,
    Array,
    General,
}

pub fn family_for(slug: &str, title: &str) -> Family {
    let text = format!("{} {}", slug.replace('-', " "), title);
    if mentions_any(&text, &["sum", "pair"]) && !mentions_any(&text, &["subarray"]) {
        Family::HashLookup
    } else if mentions_any(&text, &["tree"]) {
        Family::Tree
    } else if mentions_any(&text, &["list"]) {
        Family::LinkedList
    } else if mentions_any(&text, &["string", "palindrome", "substring"]) {
        Family::SlidingWindow
    } else if mentions_any(&text, &["array", "subarray"]) {
        Family::Array
    } else {
        Family::General
    }
}

fn solution(code: &str, time: &str, space: &str, explanation: &str) -> Solution {
    Solution {
        code: code.to_string(),
        language: SOLUTION_LANGUAGE.to_string(),
        time_complexity: time.to_string(),
        space_complexity: space.to_string(),
        explanation: explanation.to_string(),
    }
}

fn alternative(code: &str, approach: &str, complexity: &str) -> AlternativeSolution {
    AlternativeSolution {
        code: code.to_string(),
        approach: approach.to_string(),
        complexity: complexity.to_string(),
    }
}

/// Reference solution for the family the problem belongs to.
pub fn fallback_solution(problem: &Problem, slug: &str) -> SolutionBundle {
    match family_for(slug, &problem.title) {
        Family::HashLookup => SolutionBundle {
            solution: solution(
                "class Solution:\n    def twoSum(self, nums: list[int], target: int) -> list[int]:\n        seen = {}\n        for i, num in enumerate(nums):\n            complement = target - num\n            if complement in seen:\n                return [seen[complement], i]\n            seen[num] = i\n        return []\n",
                "O(n)",
                "O(n)",
                "Walk the array once, storing each value's index in a hash map. For every element, check whether its complement has already been seen.",
            ),
            alternative_solutions: vec![alternative(
                "class Solution:\n    def twoSum(self, nums: list[int], target: int) -> list[int]:\n        for i in range(len(nums)):\n            for j in range(i + 1, len(nums)):\n                if nums[i] + nums[j] == target:\n                    return [i, j]\n        return []\n",
                "Brute force over all pairs",
                "O(n^2) time, O(1) space",
            )],
        },
        Family::Tree => SolutionBundle {
            solution: solution(
                "class Solution:\n    def solve(self, root) -> int:\n        if root is None:\n            return 0\n        left = self.solve(root.left)\n        right = self.solve(root.right)\n        return 1 + max(left, right)\n",
                "O(n)",
                "O(h)",
                "Recursive depth-first traversal. Each call combines the results of the left and right subtrees; the recursion depth is bounded by the tree height h.",
            ),
            alternative_solutions: vec![alternative(
                "from collections import deque\n\nclass Solution:\n    def solve(self, root) -> int:\n        if root is None:\n            return 0\n        depth, queue = 0, deque([root])\n        while queue:\n            depth += 1\n            for _ in range(len(queue)):\n                node = queue.popleft()\n                if node.left:\n                    queue.append(node.left)\n                if node.right:\n                    queue.append(node.right)\n        return depth\n",
                "Iterative breadth-first traversal",
                "O(n) time, O(w) space",
            )],
        },
        Family::LinkedList => SolutionBundle {
            solution: solution(
                "class Solution:\n    def solve(self, head):\n        prev, curr = None, head\n        while curr:\n            nxt = curr.next\n            curr.next = prev\n            prev, curr = curr, nxt\n        return prev\n",
                "O(n)",
                "O(1)",
                "Iterate through the list with two pointers, relinking each node to its predecessor in place.",
            ),
            alternative_solutions: vec![alternative(
                "class Solution:\n    def solve(self, head):\n        if head is None or head.next is None:\n            return head\n        new_head = self.solve(head.next)\n        head.next.next = head\n        head.next = None\n        return new_head\n",
                "Recursive relinking",
                "O(n) time, O(n) space",
            )],
        },
        Family::SlidingWindow => SolutionBundle {
            solution: solution(
                "class Solution:\n    def solve(self, s: str) -> int:\n        last_seen = {}\n        start = best = 0\n        for i, ch in enumerate(s):\n            if ch in last_seen and last_seen[ch] >= start:\n                start = last_seen[ch] + 1\n            last_seen[ch] = i\n            best = max(best, i - start + 1)\n        return best\n",
                "O(n)",
                "O(k)",
                "Sliding window over the string. A map of last-seen positions lets the window's left edge jump past repeated characters; k is the alphabet size.",
            ),
            alternative_solutions: vec![alternative(
                "class Solution:\n    def solve(self, s: str) -> int:\n        best = 0\n        for i in range(len(s)):\n            seen = set()\n            for ch in s[i:]:\n                if ch in seen:\n                    break\n                seen.add(ch)\n            best = max(best, len(seen))\n        return best\n",
                "Expand from every start index",
                "O(n^2) time, O(k) space",
            )],
        },
        Family::Array => SolutionBundle {
            solution: solution(
                "class Solution:\n    def solve(self, nums: list[int]) -> int:\n        best = current = nums[0]\n        for num in nums[1:]:\n            current = max(num, current + num)\n            best = max(best, current)\n        return best\n",
                "O(n)",
                "O(1)",
                "Kadane's algorithm: keep the best sum ending at the current index and the best seen overall, extending or restarting the running sum at each step.",
            ),
            alternative_solutions: vec![alternative(
                "class Solution:\n    def solve(self, nums: list[int]) -> int:\n        best = nums[0]\n        for i in range(len(nums)):\n            total = 0\n            for j in range(i, len(nums)):\n                total += nums[j]\n                best = max(best, total)\n        return best\n",
                "Enumerate every subarray",
                "O(n^2) time, O(1) space",
            )],
        },
        Family::General => SolutionBundle {
            solution: solution(
                "class Solution:\n    def solve(self, data):\n        # Normalize the input, then process each element once.\n        result = []\n        for item in data:\n            result.append(item)\n        return result\n",
                "O(n)",
                "O(n)",
                format!(
                    "Single-pass template for \"{}\": process each input element once while accumulating the answer. Adapt the accumulation step to the problem's constraints.",
                    problem.title
                )
                .as_str(),
            ),
            alternative_solutions: Vec::new(),
        },
    }
}

pub fn synthesize(input: &CodeInput) -> CodePayload {
    let problem = fallback_problem(&input.slug);
    let bundle = fallback_solution(&problem, &input.slug);
    CodePayload {
        problem,
        solution: bundle.solution,
        alternative_solutions: bundle.alternative_solutions,
    }
}
