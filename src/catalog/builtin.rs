use super::{TopicCatalog, TopicMeta};

/// (name, hours, difficulty, prerequisites, problems easiest-first)
type TopicRow = (&'static str, u32, u32, &'static [&'static str], [&'static str; 5]);

#[rustfmt::skip]
const DSA_TOPICS: &[TopicRow] = &[
    ("Arrays", 2, 1, &[], [
        "Two Sum", "Best Time to Buy and Sell Stock", "Contains Duplicate",
        "Product of Array Except Self", "Maximum Subarray",
    ]),
    ("Strings", 2, 1, &[], [
        "Valid Anagram", "Valid Palindrome", "Longest Common Prefix",
        "String to Integer (atoi)", "Implement strStr()",
    ]),
    ("Linked Lists", 3, 2, &[], [
        "Reverse Linked List", "Merge Two Sorted Lists", "Linked List Cycle",
        "Remove Nth Node From End", "Intersection of Two Linked Lists",
    ]),
    ("Stacks", 2, 2, &["Arrays"], [
        "Valid Parentheses", "Min Stack", "Evaluate Reverse Polish Notation",
        "Daily Temperatures", "Next Greater Element",
    ]),
    ("Queues", 2, 2, &["Arrays"], [
        "Implement Queue using Stacks", "Moving Average from Data Stream",
        "Design Circular Queue", "Number of Islands (BFS)", "Perfect Squares",
    ]),
    ("Hash Tables", 3, 2, &["Arrays"], [
        "Two Sum", "Group Anagrams", "Top K Frequent Elements",
        "Subarray Sum Equals K", "Longest Substring Without Repeating Characters",
    ]),
    ("Binary Trees", 4, 3, &["Linked Lists"], [
        "Maximum Depth of Binary Tree", "Same Tree", "Invert Binary Tree",
        "Binary Tree Level Order Traversal", "Path Sum",
    ]),
    ("Binary Search Trees", 3, 3, &["Binary Trees"], [
        "Validate Binary Search Tree", "Lowest Common Ancestor of BST",
        "Convert Sorted Array to BST", "Kth Smallest Element in BST", "Range Sum of BST",
    ]),
    ("Heaps", 3, 3, &["Binary Trees"], [
        "Kth Largest Element in Array", "Merge k Sorted Lists", "Top K Frequent Elements",
        "Find Median from Data Stream", "Last Stone Weight",
    ]),
    ("Graphs", 5, 4, &["Hash Tables"], [
        "Number of Islands", "Clone Graph", "Course Schedule",
        "Pacific Atlantic Water Flow", "Alien Dictionary",
    ]),
    ("Dynamic Programming", 6, 5, &["Arrays", "Strings"], [
        "Climbing Stairs", "House Robber", "Coin Change",
        "Longest Increasing Subsequence", "Edit Distance",
    ]),
    ("Greedy Algorithms", 4, 4, &["Arrays"], [
        "Jump Game", "Gas Station", "Partition Labels",
        "Non-overlapping Intervals", "Minimum Number of Arrows",
    ]),
    ("Backtracking", 4, 4, &["Arrays", "Strings"], [
        "Permutations", "Subsets", "Combination Sum", "N-Queens", "Word Search",
    ]),
    ("Sorting Algorithms", 3, 2, &["Arrays"], [
        "Sort Colors", "Merge Intervals", "Largest Number",
        "Meeting Rooms II", "Kth Largest Element",
    ]),
    ("Searching Algorithms", 2, 2, &["Arrays"], [
        "Binary Search", "Search in Rotated Sorted Array", "Find First and Last Position",
        "Search a 2D Matrix", "Find Peak Element",
    ]),
    ("Two Pointers", 2, 2, &["Arrays"], [
        "Two Sum II", "Three Sum", "Container With Most Water",
        "Remove Duplicates from Sorted Array", "Trapping Rain Water",
    ]),
    ("Sliding Window", 3, 3, &["Arrays", "Two Pointers"], [
        "Maximum Subarray", "Minimum Window Substring", "Longest Substring Without Repeating",
        "Permutation in String", "Sliding Window Maximum",
    ]),
    ("Bit Manipulation", 2, 3, &[], [
        "Single Number", "Number of 1 Bits", "Counting Bits",
        "Missing Number", "Reverse Bits",
    ]),
    ("Trie", 3, 3, &["Strings", "Binary Trees"], [
        "Implement Trie", "Word Search II", "Add and Search Word",
        "Replace Words", "Map Sum Pairs",
    ]),
    ("Union Find", 3, 3, &["Arrays"], [
        "Number of Islands", "Friend Circles", "Redundant Connection",
        "Accounts Merge", "Most Stones Removed",
    ]),
];

pub(super) fn dsa_catalog() -> TopicCatalog {
    DSA_TOPICS.iter().fold(
        TopicCatalog::new(),
        |catalog, (name, hours, difficulty, prereqs, problems)| {
            let meta = TopicMeta::new(*name, *hours, *difficulty)
                .with_prerequisites(prereqs.iter().copied());
            catalog.with_topic(meta, problems.iter().copied())
        },
    )
}
