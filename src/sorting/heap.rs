use crate::sorting::SortStrategy;
use crate::types::{Price, Record};

/// Binary min-heap sort over an explicit key.
///
/// Records are compared only through `key`, never as whole values, so ties
/// on the key are left in whatever order the heap operations produce.
/// Not stable.
pub struct HeapSort {
    key: fn(&Record) -> Price,
}

impl Default for HeapSort {
    fn default() -> Self {
        Self::with_key(Record::price)
    }
}

impl HeapSort {
    pub fn with_key(key: fn(&Record) -> Price) -> Self {
        Self { key }
    }

    /// Move the element at `pos` down until neither child within `end` has a smaller key
    fn sift_down(&self, heap: &mut [Record], mut pos: usize, end: usize) {
        let key = self.key;

        loop {
            let left = 2 * pos + 1;
            if left >= end {
                break;
            }

            let right = left + 1;
            let mut smallest = left;
            if right < end && key(&heap[right]) < key(&heap[left]) {
                smallest = right;
            }

            if key(&heap[smallest]) < key(&heap[pos]) {
                heap.swap(pos, smallest);
                pos = smallest;
            } else {
                break;
            }
        }
    }

    fn heapify(&self, heap: &mut [Record]) {
        let len = heap.len();
        for start in (0..len / 2).rev() {
            self.sift_down(heap, start, len);
        }
    }
}

impl SortStrategy for HeapSort {
    fn name(&self) -> &'static str {
        "Heap Sort"
    }

    fn sort(&self, mut records: Vec<Record>) -> Vec<Record> {
        self.heapify(&mut records);

        let mut sorted = Vec::with_capacity(records.len());
        let mut end = records.len();

        // Pop-min: root goes to the back of the live region, then restore the heap
        while end > 0 {
            end -= 1;
            records.swap(0, end);
            sorted.push(records[end]);
            self.sift_down(&mut records, 0, end);
        }

        sorted
    }
}
